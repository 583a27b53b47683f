mod action;
mod binding;
mod parse;
mod set;
mod store;
mod v1;
mod watcher;

use thiserror::Error;

pub use action::Action;
pub use binding::{ActionBinding, BindingError};
pub use parse::{parse_settings, Settings};
pub use set::BindingSet;
pub use store::{BindingStore, SnapshotReceiver};
pub use watcher::{load_settings, BindingsEvent, BindingsWatcher, WatcherError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("v1 bindings error: {0}")]
    V1Error(#[from] v1::Error),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}
