use thiserror::Error;
use vremap_config::{ConfigError, WatcherError};

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("bindings error: {0}")]
    Config(#[from] ConfigError),
    #[error("watcher error: {0}")]
    Watcher(#[from] WatcherError),
    #[error("trace error: {0}")]
    Trace(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to set up logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("failed to set Ctrl+C handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
    #[error("invalid frame rate: {0}")]
    InvalidFps(u32),
}
