// Colorized wrappers for logging

use fern::Dispatch;
use log::SetLoggerError;

#[inline(always)]
pub(crate) fn format_log(message: &str) -> String {
    let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S").to_string();
    format!("[{now}] {message}")
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::error!("{}", message.bright_red());
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::info!("{message}");
    }
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::debug!("{}", message.dimmed());
    }
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        let message = $crate::logging::format_log(&format!($($arg)*));
        log::warn!("{}", message.bright_yellow());
    }
}

/// Setup the logger. Library crates log through the same dispatch, with
/// timestamps added here.
pub fn setup(verbose: bool, no_color: bool) -> Result<(), SetLoggerError> {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let libraries = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    Dispatch::new()
        .format(|out, message, record| {
            if record.target().starts_with("vremap_") {
                out.finish(format_args!("{}", format_log(&message.to_string())));
            } else {
                out.finish(*message);
            }
        })
        .level(log::LevelFilter::Error)
        .level_for("vremap", log_level)
        .level_for("vremap_input", libraries)
        .level_for("vremap_config", libraries)
        .level_for("vremap_core", libraries)
        .chain(std::io::stdout())
        .apply()?;

    if no_color {
        colored::control::set_override(false);
    }
    Ok(())
}
