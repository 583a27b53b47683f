use vremap_bit_mask::Bitable;
use vremap_input::ButtonSet;

use crate::action::Action;
use crate::binding::ActionBinding;

/// One [`ActionBinding`] per [`Action`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSet {
    bindings: [ActionBinding; <Action as Bitable>::COUNT],
}

impl BindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, action: Action) -> &ActionBinding {
        &self.bindings[action.index() as usize]
    }

    pub fn get_mut(&mut self, action: Action) -> &mut ActionBinding {
        &mut self.bindings[action.index() as usize]
    }

    /// Builder-style replacement of one action's binding.
    #[must_use]
    pub fn with(mut self, action: Action, binding: ActionBinding) -> Self {
        *self.get_mut(action) = binding;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, &ActionBinding)> {
        Action::ALL.into_iter().zip(self.bindings.iter())
    }

    /// Every button referenced by any binding, enabled or not.
    pub fn referenced_buttons(&self) -> ButtonSet {
        self.bindings
            .iter()
            .fold(ButtonSet::empty(), |acc, b| acc.union(&b.mask()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vremap_input::LogicalButton::*;

    #[test]
    fn iterates_in_action_order() {
        let set = BindingSet::new();
        let actions: Vec<Action> = set.iter().map(|(a, _)| a).collect();
        assert_eq!(actions, vec![Action::Pause, Action::Restart]);
    }

    #[test]
    fn referenced_buttons_spans_all_bindings() {
        let mut restart = ActionBinding::with_buttons(&[LeftMenu, RightB]).unwrap();
        restart.set_enabled(false);
        let set = BindingSet::new()
            .with(Action::Pause, ActionBinding::with_buttons(&[RightA, LeftMenu]).unwrap())
            .with(Action::Restart, restart);

        let referenced = set.referenced_buttons();
        assert_eq!(referenced.count(), 3);
        assert!(referenced.contains(RightB));
        assert!(!referenced.contains(LeftX));
    }

    #[test]
    fn overlapping_bindings_are_allowed() {
        let set = BindingSet::new()
            .with(Action::Pause, ActionBinding::with_buttons(&[LeftMenu]).unwrap())
            .with(Action::Restart, ActionBinding::with_buttons(&[LeftMenu]).unwrap());
        assert!(set.get(Action::Pause).contains(LeftMenu));
        assert!(set.get(Action::Restart).contains(LeftMenu));
    }
}
