use std::time::Duration;
use std::{fs, path::Path};

use crossbeam_channel::{unbounded, Receiver, Sender};
use notify::{Config, Error as NotifyError, RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{
    new_debouncer_opt, DebounceEventResult, DebouncedEventKind, Debouncer,
};
use thiserror::Error;

use crate::parse::{parse_settings, Settings};
use crate::ConfigError;

const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ConfigError),
}

/// Watches a bindings file and reports every reload.
pub struct BindingsWatcher {
    #[allow(dead_code)]
    watcher: Debouncer<RecommendedWatcher>,
}

pub enum BindingsEvent {
    Changed(Settings),
    Removed,
    Error(WatcherError),
}

type BindingsEventSender = Sender<BindingsEvent>;
type BindingsEventReceiver = Receiver<BindingsEvent>;

/// Read and parse the bindings file at `path`.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

fn send_bindings_event(path: &Path, tx: &BindingsEventSender) {
    let event = match load_settings(path) {
        Ok(settings) => BindingsEvent::Changed(settings),
        Err(ConfigError::PathError(e)) => BindingsEvent::Error(WatcherError::Io(e)),
        Err(e) => BindingsEvent::Error(WatcherError::Parse(e)),
    };
    let _ = tx.send(event);
}

impl BindingsWatcher {
    pub fn new_with_sender(
        path: &Path,
        tx: BindingsEventSender,
    ) -> Result<Self, WatcherError> {
        let path_c = path.to_owned();
        let tx_c = tx.clone();

        let debouncer_config = notify_debouncer_mini::Config::default()
            .with_timeout(DEBOUNCE_TIMEOUT)
            .with_notify_config(Config::default());
        let mut debouncer = new_debouncer_opt::<_, RecommendedWatcher>(
            debouncer_config,
            move |events: DebounceEventResult| match events {
                Ok(events) => {
                    for event in events {
                        match event.kind {
                            DebouncedEventKind::Any
                            | DebouncedEventKind::AnyContinuous => {
                                if !path_c.exists() {
                                    let _ = tx_c.send(BindingsEvent::Removed);
                                } else {
                                    send_bindings_event(&path_c, &tx_c);
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Err(error) => {
                    let _ = tx_c.send(BindingsEvent::Error(WatcherError::Notify(error)));
                }
            },
        )?;

        debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)?;

        Ok(Self { watcher: debouncer })
    }

    pub fn new(path: &Path) -> Result<(Self, BindingsEventReceiver), WatcherError> {
        let (tx, rx) = unbounded();

        Ok((Self::new_with_sender(path, tx)?, rx))
    }

    /// Like [`BindingsWatcher::new`], but first reports the file's current
    /// contents.
    pub fn new_with_starting_event(
        path: &Path,
    ) -> Result<(Self, BindingsEventReceiver), WatcherError> {
        let (tx, rx) = unbounded();

        send_bindings_event(path, &tx);
        Ok((Self::new_with_sender(path, tx)?, rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_settings_reports_missing_file_as_io_error() {
        let path = std::env::temp_dir().join("vremap-missing-bindings.yaml");
        let _ = fs::remove_file(&path);
        assert!(matches!(load_settings(&path), Err(ConfigError::PathError(_))));
    }

    #[test]
    fn starting_event_carries_current_contents() {
        let dir = std::env::temp_dir().join(format!("vremap-watch-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bindings.yaml");
        fs::write(&path, "version: 1\nactions:\n  pause:\n    buttons: [R_A]\n").unwrap();

        let (_watcher, rx) = BindingsWatcher::new_with_starting_event(&path).unwrap();
        match rx.try_recv().unwrap() {
            BindingsEvent::Changed(settings) => {
                assert_eq!(settings.bindings.referenced_buttons().count(), 1);
            }
            _ => panic!("expected a changed event"),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rewriting_the_file_reports_new_bindings() {
        let dir = std::env::temp_dir().join(format!("vremap-reload-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bindings.yaml");
        fs::write(&path, "version: 1\nactions:\n  pause:\n    buttons: [R_A]\n").unwrap();

        let (_watcher, rx) = BindingsWatcher::new(&path).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        fs::write(
            &path,
            "version: 1\nactions:\n  pause:\n    buttons: [R_A, L_Menu, R_B]\n",
        )
        .unwrap();

        // Partial writes may surface first as parse errors.
        let deadline = std::time::Instant::now() + Duration::from_secs(10);
        let mut reloaded = None;
        while let Some(left) = deadline.checked_duration_since(std::time::Instant::now()) {
            match rx.recv_timeout(left) {
                Ok(BindingsEvent::Changed(settings))
                    if settings.bindings.referenced_buttons().count() == 3 =>
                {
                    reloaded = Some(settings);
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
        let _ = fs::remove_dir_all(&dir);

        assert!(reloaded.is_some(), "no reload event for the rewritten file");
    }
}
