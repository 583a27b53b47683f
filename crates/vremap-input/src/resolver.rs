use ahash::{AHashMap, AHashSet};
use log::{debug, warn};

use crate::catalog::ButtonDescriptor;
use crate::platform::{DeviceHandle, InputPlatform};
use crate::types::Characteristics;

/// Expected number of distinct masks: one per controller side.
const CACHE_CAPACITY: usize = 4;

/// Resolves button descriptors to live device handles.
///
/// Entries are either valid handles or absent. A handle the platform reports
/// invalid is dropped on lookup and resolved again.
#[derive(Debug)]
pub struct DeviceResolver {
    cache: AHashMap<Characteristics, DeviceHandle>,
    // Masks already reported as missing, to warn once per outage.
    missing: AHashSet<Characteristics>,
}

impl Default for DeviceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceResolver {
    pub fn new() -> Self {
        Self {
            cache: AHashMap::with_capacity(CACHE_CAPACITY),
            missing: AHashSet::with_capacity(CACHE_CAPACITY),
        }
    }

    /// Live device for `descriptor`, or `None` when no matching device is
    /// connected.
    pub fn device<P: InputPlatform>(
        &mut self,
        platform: &P,
        descriptor: &ButtonDescriptor,
    ) -> Option<DeviceHandle> {
        self.device_for(platform, descriptor.characteristics)
    }

    pub fn device_for<P: InputPlatform>(
        &mut self,
        platform: &P,
        characteristics: Characteristics,
    ) -> Option<DeviceHandle> {
        if let Some(&handle) = self.cache.get(&characteristics) {
            if platform.is_valid(handle) {
                return Some(handle);
            }
            debug!("dropping stale device {handle}");
            self.cache.remove(&characteristics);
        }

        let found = platform
            .enumerate_devices(characteristics)
            .find(|handle| platform.is_valid(*handle));

        match found {
            Some(handle) => {
                debug!("resolved device {handle} for mask {:#x}", characteristics.value());
                self.cache.insert(characteristics, handle);
                self.missing.remove(&characteristics);
                Some(handle)
            }
            None => {
                if self.missing.insert(characteristics) {
                    warn!("no device for mask {:#x}", characteristics.value());
                }
                None
            }
        }
    }

    /// Cached handle for `characteristics`, without validation.
    pub fn cached(&self, characteristics: Characteristics) -> Option<DeviceHandle> {
        self.cache.get(&characteristics).copied()
    }

    /// Drop every cached handle. Called on controller hot-plug.
    pub fn invalidate_all(&mut self) {
        if !self.cache.is_empty() {
            debug!("invalidating {} cached devices", self.cache.len());
        }
        self.cache.clear();
        self.missing.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
