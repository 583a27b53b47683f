use thiserror::Error;

use crate::platform::DeviceHandle;
use crate::types::Hand;

/// Error type for input catalog and platform operations.
#[derive(Debug, Error)]
pub enum InputError {
    /// Token does not name a known logical button.
    #[error("unknown button: {0}")]
    UnknownButton(String),
    /// Handle does not refer to a connected device.
    #[error("device not available: {0}")]
    DeviceUnavailable(DeviceHandle),
    /// No controller is connected for the hand.
    #[error("no {0} controller connected")]
    NoController(Hand),
    /// Every device slot is taken.
    #[error("too many devices connected")]
    TooManyDevices,
    /// The device does not expose the requested feature.
    #[error("feature {feature} not supported by device {handle}")]
    UnsupportedFeature {
        handle: DeviceHandle,
        feature: &'static str,
    },
}

/// Convenient result alias for input operations.
pub type Result<T> = std::result::Result<T, InputError>;
