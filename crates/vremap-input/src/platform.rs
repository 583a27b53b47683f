use std::fmt;

use crate::types::{Characteristics, Feature};

/// Opaque handle to a device owned by an [`InputPlatform`].
///
/// The generation changes every time a device slot is reused, so a handle to
/// a detached device never becomes valid again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl DeviceHandle {
    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.slot, self.generation)
    }
}

/// Device enumeration and feature sampling provided by the XR runtime.
///
/// Every method is called from the frame thread and must not block.
pub trait InputPlatform {
    /// Devices whose characteristics contain every flag in `characteristics`.
    fn enumerate_devices(
        &self,
        characteristics: Characteristics,
    ) -> impl Iterator<Item = DeviceHandle> + '_;

    /// Whether `handle` still refers to a connected device.
    fn is_valid(&self, handle: DeviceHandle) -> bool;

    /// Sample a boolean feature. `None` when the handle is stale or the
    /// device does not report the feature.
    fn read_bool(&self, handle: DeviceHandle, feature: Feature) -> Option<bool>;
}
