use smallvec::SmallVec;
use thiserror::Error;
use vremap_input::{ButtonSet, LogicalButton};

/// Rejected binding mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("{0} is already bound")]
    Duplicate(LogicalButton),
}

/// Buttons bound to one action plus its flags.
///
/// Buttons are unique. `buttons()` keeps insertion order for display; the
/// membership mask answers `contains` in constant time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBinding {
    buttons: SmallVec<[LogicalButton; 4]>,
    members: ButtonSet,
    enabled: bool,
    block_built_in: bool,
}

impl ActionBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an enabled binding from `buttons`, rejecting duplicates.
    pub fn with_buttons(buttons: &[LogicalButton]) -> Result<Self, BindingError> {
        let mut binding = Self::new();
        binding.set(buttons)?;
        binding.enabled = true;
        Ok(binding)
    }

    #[inline]
    pub fn contains(&self, button: LogicalButton) -> bool {
        self.members.contains(button)
    }

    /// Bound buttons in insertion order.
    pub fn buttons(&self) -> &[LogicalButton] {
        &self.buttons
    }

    /// Bound buttons as a set.
    #[inline]
    pub fn mask(&self) -> ButtonSet {
        self.members
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn block_built_in(&self) -> bool {
        self.block_built_in
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn add(&mut self, button: LogicalButton) -> Result<(), BindingError> {
        if !self.members.insert(button) {
            return Err(BindingError::Duplicate(button));
        }
        self.buttons.push(button);
        Ok(())
    }

    /// Returns `false` when the button was not bound.
    pub fn remove(&mut self, button: LogicalButton) -> bool {
        if !self.members.remove(button) {
            return false;
        }
        self.buttons.retain(|b| *b != button);
        true
    }

    /// Replace the bound buttons. On error the binding is left untouched.
    pub fn set(&mut self, buttons: &[LogicalButton]) -> Result<(), BindingError> {
        let mut members = ButtonSet::empty();
        for &button in buttons {
            if !members.insert(button) {
                return Err(BindingError::Duplicate(button));
            }
        }
        self.members = members;
        self.buttons = SmallVec::from_slice(buttons);
        Ok(())
    }

    /// Restore the default: no buttons, disabled, not blocking.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_block_built_in(&mut self, block: bool) {
        self.block_built_in = block;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LogicalButton::*;

    #[test]
    fn default_is_empty_and_disabled() {
        let binding = ActionBinding::new();
        assert!(binding.is_empty());
        assert!(!binding.enabled());
        assert!(!binding.block_built_in());
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut binding = ActionBinding::new();
        binding.add(RightA).unwrap();
        assert_eq!(binding.add(RightA), Err(BindingError::Duplicate(RightA)));
        assert_eq!(binding.buttons(), &[RightA]);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut binding = ActionBinding::new();
        binding.add(RightMenu).unwrap();
        binding.add(LeftX).unwrap();
        binding.add(RightA).unwrap();
        assert_eq!(binding.buttons(), &[RightMenu, LeftX, RightA]);
    }

    #[test]
    fn remove_then_add_keeps_membership() {
        let mut binding = ActionBinding::with_buttons(&[LeftTrigger, RightA, LeftMenu]).unwrap();
        let before = binding.mask();

        assert!(binding.remove(RightA));
        assert!(!binding.contains(RightA));
        assert!(!binding.remove(RightA));
        binding.add(RightA).unwrap();

        assert_eq!(binding.mask(), before);
        assert_eq!(binding.len(), 3);
    }

    #[test]
    fn set_is_atomic_on_duplicate() {
        let mut binding = ActionBinding::with_buttons(&[LeftGrip]).unwrap();
        assert_eq!(
            binding.set(&[RightB, RightB]),
            Err(BindingError::Duplicate(RightB))
        );
        assert_eq!(binding.buttons(), &[LeftGrip]);
        assert!(binding.contains(LeftGrip));
        assert!(!binding.contains(RightB));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut binding = ActionBinding::with_buttons(&[LeftStick]).unwrap();
        binding.set_block_built_in(true);
        binding.reset();
        assert_eq!(binding, ActionBinding::default());
    }
}
