use vremap_input::{descriptor, ButtonSet, DeviceResolver, InputPlatform, LogicalButton};

use crate::state::{ButtonStates, Transition};

/// Samples every button once per frame and reports edges for the active ones.
///
/// Held state is tracked for all buttons, so changing the active set never
/// fabricates or swallows a press.
#[derive(Debug, Default)]
pub struct FramePoller {
    states: ButtonStates,
    active: ButtonSet,
    pressed: ButtonSet,
    frame: u64,
}

impl FramePoller {
    pub fn new(active: ButtonSet) -> Self {
        Self {
            active,
            ..Self::default()
        }
    }

    pub fn active(&self) -> ButtonSet {
        self.active
    }

    /// Change the set of buttons that report presses.
    pub fn set_active(&mut self, active: ButtonSet) {
        self.pressed = self.pressed.intersection(&active);
        self.active = active;
    }

    /// Sample every button and return the active ones that went from
    /// released to pressed.
    ///
    /// A button whose device or feature is unavailable reads as released.
    pub fn poll<P: InputPlatform>(
        &mut self,
        platform: &P,
        resolver: &mut DeviceResolver,
    ) -> ButtonSet {
        self.frame = self.frame.wrapping_add(1);
        self.pressed.clear();

        for button in LogicalButton::ALL {
            let desc = descriptor(button);
            let sampled = resolver
                .device(platform, &desc)
                .and_then(|handle| platform.read_bool(handle, desc.feature))
                .unwrap_or(false);
            if self.states.update(button, sampled) == Transition::Pressed
                && self.active.contains(button)
            {
                self.pressed.insert(button);
            }
        }
        self.pressed
    }

    #[inline]
    pub fn is_held(&self, button: LogicalButton) -> bool {
        self.states.is_held(button)
    }

    /// Active buttons that went down during the last poll.
    #[inline]
    pub fn pressed_this_frame(&self) -> ButtonSet {
        self.pressed
    }

    /// Number of completed polls.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
