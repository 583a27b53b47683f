use std::{fs, path::Path};

use serde::Deserialize;
use vremap_input::{Hand, XrNode};

use crate::error::AppError;

fn default_runtime() -> String {
    "OpenXR".to_string()
}

fn default_repeat() -> u32 {
    1
}

/// Recorded controller input, one entry per frame.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Trace {
    #[serde(default = "default_runtime")]
    pub runtime: String,
    /// Controllers connected before the first frame.
    #[serde(default)]
    pub controllers: Vec<TraceHand>,
    pub frames: Vec<TraceFrame>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TraceHand {
    Left,
    Right,
}

impl TraceHand {
    pub fn hand(self) -> Hand {
        match self {
            TraceHand::Left => Hand::Left,
            TraceHand::Right => Hand::Right,
        }
    }

    pub fn node(self) -> XrNode {
        XrNode::for_hand(self.hand())
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TraceFrame {
    /// Button tokens held during the frame, e.g. `R_A`.
    #[serde(default)]
    pub held: Vec<String>,
    #[serde(default)]
    pub connect: Vec<TraceHand>,
    #[serde(default)]
    pub disconnect: Vec<TraceHand>,
    /// Native level answer for the menu button.
    #[serde(default)]
    pub native_menu: bool,
    /// Native edge answer for the menu button.
    #[serde(default)]
    pub native_menu_down: bool,
    /// Arm button capture before polling.
    #[serde(default)]
    pub capture: bool,
    /// How many identical frames this entry stands for.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

pub(crate) fn parse_trace(input: &str) -> Result<Trace, AppError> {
    let trace: Trace = serde_yaml::from_str(input)?;
    Ok(trace)
}

pub(crate) fn load_trace(path: &Path) -> Result<Trace, AppError> {
    let content = fs::read_to_string(path)?;
    parse_trace(&content)
}
