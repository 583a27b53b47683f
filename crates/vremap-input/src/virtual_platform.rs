use log::debug;
use vremap_bit_mask::Bitmask;

use crate::catalog::controller_characteristics;
use crate::error::{InputError, Result};
use crate::platform::{DeviceHandle, InputPlatform};
use crate::types::{Characteristic, Characteristics, Feature, Hand, LogicalButton};

#[derive(Debug)]
struct VirtualDevice {
    name: Box<str>,
    characteristics: Characteristics,
    generation: u32,
    connected: bool,
    features: Bitmask<Feature>,
    pressed: Bitmask<Feature>,
}

/// In-memory input platform.
///
/// Disconnected slots are reused; every connection gets a fresh generation,
/// so handles to the previous occupant stay invalid.
#[derive(Debug, Default)]
pub struct VirtualPlatform {
    devices: Vec<VirtualDevice>,
    next_generation: u32,
}

impl VirtualPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a device with the given characteristics and features. The
    /// first disconnected slot is reused under a new generation.
    pub fn connect(
        &mut self,
        name: &str,
        characteristics: Characteristics,
        features: Bitmask<Feature>,
    ) -> Result<DeviceHandle> {
        let slot = self
            .devices
            .iter()
            .position(|d| !d.connected)
            .unwrap_or(self.devices.len());
        let slot = u32::try_from(slot).map_err(|_| InputError::TooManyDevices)?;
        self.next_generation = self.next_generation.wrapping_add(1);
        let handle = DeviceHandle {
            slot,
            generation: self.next_generation,
        };
        let device = VirtualDevice {
            name: name.into(),
            characteristics,
            generation: handle.generation,
            connected: true,
            features,
            pressed: Bitmask::empty(),
        };
        match self.devices.get_mut(slot as usize) {
            Some(entry) => *entry = device,
            None => self.devices.push(device),
        }
        debug!("virtual device {name} connected as {handle}");
        Ok(handle)
    }

    /// Attach a hand controller reporting every button feature.
    pub fn connect_controller(&mut self, hand: Hand) -> Result<DeviceHandle> {
        let mut characteristics = controller_characteristics(hand);
        characteristics.insert(Characteristic::HeldInHand);
        characteristics.insert(Characteristic::TrackedDevice);
        let name = match hand {
            Hand::Left => "virtual left controller",
            Hand::Right => "virtual right controller",
        };
        self.connect(name, characteristics, Bitmask::all())
    }

    pub fn disconnect(&mut self, handle: DeviceHandle) -> Result<()> {
        let device = self.device_mut(handle)?;
        device.connected = false;
        device.pressed.clear();
        debug!("virtual device {} disconnected", device.name);
        Ok(())
    }

    /// First connected controller held in `hand`.
    pub fn controller(&self, hand: Hand) -> Option<DeviceHandle> {
        self.enumerate_devices(controller_characteristics(hand)).next()
    }

    pub fn set_feature(
        &mut self,
        handle: DeviceHandle,
        feature: Feature,
        pressed: bool,
    ) -> Result<()> {
        let device = self.device_mut(handle)?;
        if !device.features.contains(feature) {
            return Err(InputError::UnsupportedFeature {
                handle,
                feature: feature.name(),
            });
        }
        if pressed {
            device.pressed.insert(feature);
        } else {
            device.pressed.remove(feature);
        }
        Ok(())
    }

    pub fn press(&mut self, handle: DeviceHandle, feature: Feature) -> Result<()> {
        self.set_feature(handle, feature, true)
    }

    pub fn release(&mut self, handle: DeviceHandle, feature: Feature) -> Result<()> {
        self.set_feature(handle, feature, false)
    }

    /// Press or release a logical button on whichever controller is
    /// connected for its hand.
    pub fn set_button(&mut self, button: LogicalButton, pressed: bool) -> Result<()> {
        let handle = self
            .controller(button.hand())
            .ok_or(InputError::NoController(button.hand()))?;
        self.set_feature(handle, button.feature(), pressed)
    }

    /// Release every feature of every connected device.
    pub fn release_all(&mut self) {
        for device in &mut self.devices {
            device.pressed.clear();
        }
    }

    fn device_mut(&mut self, handle: DeviceHandle) -> Result<&mut VirtualDevice> {
        self.devices
            .get_mut(handle.slot as usize)
            .filter(|d| d.connected && d.generation == handle.generation)
            .ok_or(InputError::DeviceUnavailable(handle))
    }

    fn device(&self, handle: DeviceHandle) -> Option<&VirtualDevice> {
        self.devices
            .get(handle.slot as usize)
            .filter(|d| d.connected && d.generation == handle.generation)
    }
}

impl InputPlatform for VirtualPlatform {
    fn enumerate_devices(
        &self,
        characteristics: Characteristics,
    ) -> impl Iterator<Item = DeviceHandle> + '_ {
        self.devices
            .iter()
            .enumerate()
            .filter(move |(_, d)| d.connected && d.characteristics.is_superset(&characteristics))
            .map(|(slot, d)| DeviceHandle {
                slot: slot as u32,
                generation: d.generation,
            })
    }

    fn is_valid(&self, handle: DeviceHandle) -> bool {
        self.device(handle).is_some()
    }

    fn read_bool(&self, handle: DeviceHandle, feature: Feature) -> Option<bool> {
        let device = self.device(handle)?;
        if !device.features.contains(feature) {
            return None;
        }
        Some(device.pressed.contains(feature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_by_characteristics_subset() {
        let mut platform = VirtualPlatform::new();
        let left = platform.connect_controller(Hand::Left).unwrap();
        let right = platform.connect_controller(Hand::Right).unwrap();

        let lefts: Vec<_> = platform
            .enumerate_devices(controller_characteristics(Hand::Left))
            .collect();
        assert_eq!(lefts, vec![left]);

        let controllers: Vec<_> = platform
            .enumerate_devices(Bitmask::new(&[Characteristic::Controller]))
            .collect();
        assert_eq!(controllers, vec![left, right]);
    }

    #[test]
    fn reads_pressed_features() {
        let mut platform = VirtualPlatform::new();
        let right = platform.connect_controller(Hand::Right).unwrap();
        assert_eq!(platform.read_bool(right, Feature::PrimaryButton), Some(false));

        platform.press(right, Feature::PrimaryButton).unwrap();
        assert_eq!(platform.read_bool(right, Feature::PrimaryButton), Some(true));

        platform.release(right, Feature::PrimaryButton).unwrap();
        assert_eq!(platform.read_bool(right, Feature::PrimaryButton), Some(false));
    }

    #[test]
    fn missing_feature_reads_none() {
        let mut platform = VirtualPlatform::new();
        let pad = platform.connect(
            "trigger only",
            controller_characteristics(Hand::Left),
            Bitmask::new(&[Feature::TriggerButton]),
        )
        .unwrap();
        assert_eq!(platform.read_bool(pad, Feature::MenuButton), None);
        assert!(matches!(
            platform.press(pad, Feature::MenuButton),
            Err(InputError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn disconnected_handle_never_revives() {
        let mut platform = VirtualPlatform::new();
        let old = platform.connect_controller(Hand::Left).unwrap();
        platform.press(old, Feature::GripButton).unwrap();
        platform.disconnect(old).unwrap();

        assert!(!platform.is_valid(old));
        assert_eq!(platform.read_bool(old, Feature::GripButton), None);
        assert!(platform.disconnect(old).is_err());

        let new = platform.connect_controller(Hand::Left).unwrap();
        assert!(platform.is_valid(new));
        assert!(!platform.is_valid(old));
        assert_eq!(platform.controller(Hand::Left), Some(new));
    }

    #[test]
    fn reconnect_reuses_the_free_slot() {
        let mut platform = VirtualPlatform::new();
        let left = platform.connect_controller(Hand::Left).unwrap();
        let right = platform.connect_controller(Hand::Right).unwrap();

        for _ in 0..3 {
            let current = platform.controller(Hand::Left).unwrap();
            platform.disconnect(current).unwrap();
            let again = platform.connect_controller(Hand::Left).unwrap();
            assert_eq!(again.slot(), left.slot());
            assert_ne!(again, current);
            assert!(!platform.is_valid(current));
        }

        assert_eq!(platform.devices.len(), 2);
        assert!(platform.is_valid(right));
        assert!(!platform.is_valid(left));
    }

    #[test]
    fn set_button_targets_the_matching_hand() {
        let mut platform = VirtualPlatform::new();
        let left = platform.connect_controller(Hand::Left).unwrap();
        let right = platform.connect_controller(Hand::Right).unwrap();

        platform.set_button(LogicalButton::RightTrigger, true).unwrap();
        assert_eq!(platform.read_bool(right, Feature::TriggerButton), Some(true));
        assert_eq!(platform.read_bool(left, Feature::TriggerButton), Some(false));

        platform.release_all();
        assert_eq!(platform.read_bool(right, Feature::TriggerButton), Some(false));
    }
}
