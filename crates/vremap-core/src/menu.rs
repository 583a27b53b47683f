use vremap_config::{Action, BindingSet};
use vremap_input::{ButtonSet, LogicalButton};

/// Answers the host's "is the menu button down" questions, folding in the
/// bindings of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOverride {
    action: Action,
}

impl Default for MenuOverride {
    fn default() -> Self {
        Self::new(Action::Pause)
    }
}

impl MenuOverride {
    pub fn new(action: Action) -> Self {
        Self { action }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// Edge query: true when the native menu button went down this frame or
    /// a bound button did. Blocking never suppresses the native edge.
    pub fn query_edge(&self, native: bool, bindings: &BindingSet, pressed: ButtonSet) -> bool {
        if native {
            return true;
        }
        let binding = bindings.get(self.action);
        binding.enabled() && binding.mask().intersects(&pressed)
    }

    /// Level query. An enabled binding adds its held buttons to the native
    /// state; a blocking one replaces the native state entirely.
    pub fn query_level<F>(&self, native: bool, bindings: &BindingSet, is_held: F) -> bool
    where
        F: Fn(LogicalButton) -> bool,
    {
        let binding = bindings.get(self.action);
        if !binding.enabled() {
            return native;
        }
        if native && !binding.block_built_in() {
            return true;
        }
        binding.buttons().iter().any(|b| is_held(*b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vremap_config::ActionBinding;
    use LogicalButton::*;

    fn bindings(enabled: bool, block: bool, buttons: &[LogicalButton]) -> BindingSet {
        let mut binding = ActionBinding::with_buttons(buttons).unwrap();
        binding.set_enabled(enabled);
        binding.set_block_built_in(block);
        BindingSet::new().with(Action::Pause, binding)
    }

    #[test]
    fn disabled_binding_passes_native_through() {
        let menu = MenuOverride::default();
        for block in [false, true] {
            let set = bindings(false, block, &[RightA]);
            assert!(menu.query_level(true, &set, |_| false));
            assert!(!menu.query_level(false, &set, |_| true));
        }
    }

    #[test]
    fn non_blocking_level_ors_native_with_bound_buttons() {
        let menu = MenuOverride::default();
        let set = bindings(true, false, &[RightA]);

        assert!(menu.query_level(true, &set, |_| false));
        assert!(menu.query_level(false, &set, |b| b == RightA));
        assert!(!menu.query_level(false, &set, |b| b == RightB));
    }

    #[test]
    fn blocking_level_follows_bound_buttons() {
        let menu = MenuOverride::default();
        let set = bindings(true, true, &[LeftTrigger, RightA]);

        assert!(menu.query_level(false, &set, |b| b == RightA));
        assert!(!menu.query_level(true, &set, |_| false));
        assert!(!menu.query_level(true, &set, |b| b == LeftX));
    }

    #[test]
    fn blocking_with_no_buttons_is_never_down() {
        let menu = MenuOverride::default();
        let set = bindings(true, true, &[]);
        assert!(!menu.query_level(true, &set, |_| true));
    }

    #[test]
    fn edge_ors_native_with_bound_presses() {
        let menu = MenuOverride::default();
        let set = bindings(true, true, &[RightA]);

        assert!(menu.query_edge(true, &set, ButtonSet::empty()));
        assert!(menu.query_edge(false, &set, ButtonSet::new(&[RightA])));
        assert!(!menu.query_edge(false, &set, ButtonSet::new(&[RightB])));
    }

    #[test]
    fn disabled_binding_adds_no_edge() {
        let menu = MenuOverride::default();
        let set = bindings(false, false, &[RightA]);
        assert!(!menu.query_edge(false, &set, ButtonSet::new(&[RightA])));
        assert!(menu.query_edge(true, &set, ButtonSet::new(&[RightA])));
    }

    #[test]
    fn follows_the_configured_action() {
        let menu = MenuOverride::new(Action::Restart);
        let set = bindings(true, true, &[RightA]);
        assert!(menu.query_level(true, &set, |_| false));
        assert!(!menu.query_edge(false, &set, ButtonSet::new(&[RightA])));
    }
}
