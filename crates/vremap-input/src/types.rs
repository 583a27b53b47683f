use std::fmt;
use std::str::FromStr;

use vremap_bit_derive::Bit;
use vremap_bit_mask::{Bitable, Bitmask};

use crate::error::InputError;

/// Controller side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn name(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical controller buttons that can be bound to actions.
///
/// Declaration order is the ordinal used for state arrays and masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Bit)]
pub enum LogicalButton {
    LeftX,
    LeftY,
    LeftGrip,
    LeftTrigger,
    LeftStick,
    LeftMenu,
    RightA,
    RightB,
    RightGrip,
    RightTrigger,
    RightStick,
    RightMenu,
}

impl LogicalButton {
    /// Every button in ordinal order.
    pub const ALL: [LogicalButton; <LogicalButton as Bitable>::COUNT] = [
        LogicalButton::LeftX,
        LogicalButton::LeftY,
        LogicalButton::LeftGrip,
        LogicalButton::LeftTrigger,
        LogicalButton::LeftStick,
        LogicalButton::LeftMenu,
        LogicalButton::RightA,
        LogicalButton::RightB,
        LogicalButton::RightGrip,
        LogicalButton::RightTrigger,
        LogicalButton::RightStick,
        LogicalButton::RightMenu,
    ];

    /// Configuration token, e.g. `R_A`.
    pub fn token(self) -> &'static str {
        match self {
            LogicalButton::LeftX => "L_X",
            LogicalButton::LeftY => "L_Y",
            LogicalButton::LeftGrip => "L_Grip",
            LogicalButton::LeftTrigger => "L_Trigger",
            LogicalButton::LeftStick => "L_Stick",
            LogicalButton::LeftMenu => "L_Menu",
            LogicalButton::RightA => "R_A",
            LogicalButton::RightB => "R_B",
            LogicalButton::RightGrip => "R_Grip",
            LogicalButton::RightTrigger => "R_Trigger",
            LogicalButton::RightStick => "R_Stick",
            LogicalButton::RightMenu => "R_Menu",
        }
    }

    pub fn hand(self) -> Hand {
        if self.index() < LogicalButton::RightA.index() {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    pub fn feature(self) -> Feature {
        match self {
            LogicalButton::LeftX | LogicalButton::RightA => Feature::PrimaryButton,
            LogicalButton::LeftY | LogicalButton::RightB => Feature::SecondaryButton,
            LogicalButton::LeftGrip | LogicalButton::RightGrip => Feature::GripButton,
            LogicalButton::LeftTrigger | LogicalButton::RightTrigger => {
                Feature::TriggerButton
            }
            LogicalButton::LeftStick | LogicalButton::RightStick => {
                Feature::Primary2DAxisClick
            }
            LogicalButton::LeftMenu | LogicalButton::RightMenu => Feature::MenuButton,
        }
    }

    /// The button on `hand` that samples `feature`.
    pub fn from_parts(hand: Hand, feature: Feature) -> LogicalButton {
        let offset = match hand {
            Hand::Left => 0,
            Hand::Right => LogicalButton::RightA.index(),
        };
        let ordinal = offset + feature.index();
        LogicalButton::ALL[ordinal as usize]
    }
}

impl fmt::Display for LogicalButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for LogicalButton {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicalButton::ALL
            .iter()
            .copied()
            .find(|button| button.token() == s)
            .ok_or_else(|| InputError::UnknownButton(s.to_string()))
    }
}

/// Boolean features a controller reports.
///
/// Ordinals match the per-hand button layout of [`LogicalButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Bit)]
pub enum Feature {
    PrimaryButton,
    SecondaryButton,
    GripButton,
    TriggerButton,
    Primary2DAxisClick,
    MenuButton,
}

impl Feature {
    /// Usage name as reported by the XR runtime.
    pub fn name(self) -> &'static str {
        match self {
            Feature::PrimaryButton => "primaryButton",
            Feature::SecondaryButton => "secondaryButton",
            Feature::GripButton => "gripButton",
            Feature::TriggerButton => "triggerButton",
            Feature::Primary2DAxisClick => "primary2DAxisClick",
            Feature::MenuButton => "menuButton",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Device characteristic flags used to select devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Bit)]
pub enum Characteristic {
    HeadMounted,
    Camera,
    HeldInHand,
    HandTracking,
    EyeTracking,
    TrackedDevice,
    Controller,
    TrackingReference,
    Left,
    Right,
}

/// A characteristic mask. A device matches when it has every requested flag.
pub type Characteristics = Bitmask<Characteristic>;

/// Tracked nodes reported by hot-plug notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XrNode {
    LeftEye,
    RightEye,
    CenterEye,
    Head,
    LeftHand,
    RightHand,
    GameController,
    TrackingReference,
    HardwareTracker,
}

impl XrNode {
    /// Whether the node is one of the hand controllers.
    pub fn is_hand(self) -> bool {
        matches!(self, XrNode::LeftHand | XrNode::RightHand)
    }

    pub fn for_hand(hand: Hand) -> XrNode {
        match hand {
            Hand::Left => XrNode::LeftHand,
            Hand::Right => XrNode::RightHand,
        }
    }
}
