use log::{info, warn};

use crate::null::NullPlatform;
use crate::platform::{DeviceHandle, InputPlatform};
use crate::types::{Characteristics, Feature};
use crate::virtual_platform::VirtualPlatform;

const SUPPORTED_RUNTIME: &str = "openxr";

/// Platform chosen for the loaded XR runtime.
#[derive(Debug)]
pub enum Backend {
    Virtual(VirtualPlatform),
    Null(NullPlatform),
}

impl Backend {
    /// Pick a backend from the runtime name. Only OpenXR runtimes are
    /// supported; anything else gets a platform that never reports input.
    pub fn for_runtime(name: &str) -> Self {
        if name.to_ascii_lowercase().contains(SUPPORTED_RUNTIME) {
            info!("runtime {name} supported, using virtual input platform");
            Backend::Virtual(VirtualPlatform::new())
        } else {
            let shown = if name.trim().is_empty() { "null" } else { name };
            warn!("runtime ({shown}) is not supported, input is disabled");
            Backend::Null(NullPlatform)
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Backend::Virtual(_))
    }

    pub fn as_virtual_mut(&mut self) -> Option<&mut VirtualPlatform> {
        match self {
            Backend::Virtual(platform) => Some(platform),
            Backend::Null(_) => None,
        }
    }
}

/// Device iterator of a [`Backend`].
pub enum BackendDevices<V, N> {
    Virtual(V),
    Null(N),
}

impl<V, N> Iterator for BackendDevices<V, N>
where
    V: Iterator<Item = DeviceHandle>,
    N: Iterator<Item = DeviceHandle>,
{
    type Item = DeviceHandle;

    fn next(&mut self) -> Option<DeviceHandle> {
        match self {
            BackendDevices::Virtual(iter) => iter.next(),
            BackendDevices::Null(iter) => iter.next(),
        }
    }
}

impl InputPlatform for Backend {
    fn enumerate_devices(
        &self,
        characteristics: Characteristics,
    ) -> impl Iterator<Item = DeviceHandle> + '_ {
        match self {
            Backend::Virtual(p) => {
                BackendDevices::Virtual(p.enumerate_devices(characteristics))
            }
            Backend::Null(p) => BackendDevices::Null(p.enumerate_devices(characteristics)),
        }
    }

    fn is_valid(&self, handle: DeviceHandle) -> bool {
        match self {
            Backend::Virtual(p) => p.is_valid(handle),
            Backend::Null(p) => p.is_valid(handle),
        }
    }

    fn read_bool(&self, handle: DeviceHandle, feature: Feature) -> Option<bool> {
        match self {
            Backend::Virtual(p) => p.read_bool(handle, feature),
            Backend::Null(p) => p.read_bool(handle, feature),
        }
    }
}
