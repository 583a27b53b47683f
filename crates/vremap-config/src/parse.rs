use serde::Deserialize;

use crate::action::Action;
use crate::set::BindingSet;
use crate::v1::BindingsV1;
use crate::ConfigError;

/// Parsed bindings document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bindings: BindingSet,
    /// Action whose binding rewrites the host's menu button queries.
    pub menu_action: Action,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: BindingSet::default(),
            menu_action: Action::Pause,
        }
    }
}

/// Parse a yaml bindings document.
pub fn parse_settings(input: &str) -> Result<Settings, ConfigError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let raw: BindingsV1 = serde_yaml::from_str(input)?;
            Ok(raw.parse()?)
        }
        _ => Err(ConfigError::UnsupportedVersion(version)),
    }
}

#[derive(Debug, Clone, Deserialize)]
struct VersionedBindings {
    version: u8,
}

fn parse_version(input: &str) -> Result<u8, ConfigError> {
    let raw: VersionedBindings = serde_yaml::from_str(input)?;
    Ok(raw.version)
}
