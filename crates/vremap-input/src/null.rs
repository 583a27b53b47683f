use crate::platform::{DeviceHandle, InputPlatform};
use crate::types::{Characteristics, Feature};

/// Platform for unsupported runtimes. It has no devices, so every button
/// reads as released.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPlatform;

impl InputPlatform for NullPlatform {
    fn enumerate_devices(
        &self,
        _characteristics: Characteristics,
    ) -> impl Iterator<Item = DeviceHandle> + '_ {
        std::iter::empty()
    }

    fn is_valid(&self, _handle: DeviceHandle) -> bool {
        false
    }

    fn read_bool(&self, _handle: DeviceHandle, _feature: Feature) -> Option<bool> {
        None
    }
}
