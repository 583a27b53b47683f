use vremap_bit_mask::Bitmask;

use crate::types::{Characteristic, Characteristics, Feature, Hand, LogicalButton};

/// Where a logical button lives on the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonDescriptor {
    pub button: LogicalButton,
    /// Devices to search for this button.
    pub characteristics: Characteristics,
    /// Boolean feature sampled on the matching device.
    pub feature: Feature,
}

const LEFT_CONTROLLER: Characteristics = Bitmask::from_value(
    (1 << Characteristic::Left as u64) | (1 << Characteristic::Controller as u64),
);
const RIGHT_CONTROLLER: Characteristics = Bitmask::from_value(
    (1 << Characteristic::Right as u64) | (1 << Characteristic::Controller as u64),
);

/// Characteristic mask selecting the controller held in `hand`.
pub fn controller_characteristics(hand: Hand) -> Characteristics {
    match hand {
        Hand::Left => LEFT_CONTROLLER,
        Hand::Right => RIGHT_CONTROLLER,
    }
}

/// Descriptor of a logical button.
pub fn descriptor(button: LogicalButton) -> ButtonDescriptor {
    ButtonDescriptor {
        button,
        characteristics: controller_characteristics(button.hand()),
        feature: button.feature(),
    }
}

/// Look up a configuration token such as `L_Trigger`.
///
/// Unknown tokens return `None`; callers skip the binding and carry on.
pub fn resolve(token: &str) -> Option<ButtonDescriptor> {
    token.parse::<LogicalButton>().ok().map(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_tokens() {
        let desc = resolve("L_Trigger").unwrap();
        assert_eq!(desc.button, LogicalButton::LeftTrigger);
        assert_eq!(desc.feature, Feature::TriggerButton);
        assert!(desc.characteristics.contains(Characteristic::Left));
        assert!(desc.characteristics.contains(Characteristic::Controller));
        assert!(!desc.characteristics.contains(Characteristic::Right));
    }

    #[test]
    fn unknown_tokens_resolve_to_none() {
        assert_eq!(resolve("Menu"), None);
        assert_eq!(resolve("r_a"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn const_masks_match_runtime_masks() {
        assert_eq!(
            LEFT_CONTROLLER,
            Bitmask::new(&[Characteristic::Left, Characteristic::Controller])
        );
        assert_eq!(
            RIGHT_CONTROLLER,
            Bitmask::new(&[Characteristic::Right, Characteristic::Controller])
        );
    }

    #[test]
    fn buttons_of_one_side_share_a_device_mask() {
        let a = descriptor(LogicalButton::RightA);
        let menu = descriptor(LogicalButton::RightMenu);
        assert_eq!(a.characteristics, menu.characteristics);
        assert_ne!(a.characteristics, descriptor(LogicalButton::LeftX).characteristics);
    }
}
