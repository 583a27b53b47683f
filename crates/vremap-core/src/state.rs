use vremap_bit_mask::Bitable;
use vremap_input::{ButtonSet, LogicalButton};

const BUTTONS: usize = <LogicalButton as Bitable>::COUNT;

/// Result of feeding one sample into [`ButtonStates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Pressed,
    Released,
    Unchanged,
}

/// Held state of every logical button as of the last poll, indexed by
/// ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    held: [bool; BUTTONS],
}

impl Default for ButtonStates {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonStates {
    pub const fn new() -> Self {
        Self {
            held: [false; BUTTONS],
        }
    }

    #[inline]
    pub fn is_held(&self, button: LogicalButton) -> bool {
        self.held[button.index() as usize]
    }

    /// Store the sampled state and report the edge it makes.
    #[inline]
    pub fn update(&mut self, button: LogicalButton, pressed: bool) -> Transition {
        let slot = &mut self.held[button.index() as usize];
        match (*slot, pressed) {
            (false, true) => {
                *slot = true;
                Transition::Pressed
            }
            (true, false) => {
                *slot = false;
                Transition::Released
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn held(&self) -> ButtonSet {
        LogicalButton::ALL
            .iter()
            .copied()
            .filter(|b| self.is_held(*b))
            .collect()
    }

    pub fn clear(&mut self) {
        self.held = [false; BUTTONS];
    }
}
