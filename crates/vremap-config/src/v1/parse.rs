use log::warn;
use vremap_input::LogicalButton;

use crate::action::Action;
use crate::binding::ActionBinding;
use crate::parse::Settings;
use crate::set::BindingSet;

use super::profile::{ActionV1, BindingsV1};
use super::Error;

impl BindingsV1 {
    pub(crate) fn parse(&self) -> Result<Settings, Error> {
        debug_assert_eq!(self.version, 1);

        let menu_action = match self.menu_action.as_deref() {
            Some(name) => name
                .parse::<Action>()
                .map_err(Error::InvalidMenuAction)?,
            None => Action::Pause,
        };

        let mut bindings = BindingSet::new();
        for (name, raw) in &self.actions {
            let Ok(action) = name.parse::<Action>() else {
                warn!("skipping bindings for unknown action {name}");
                continue;
            };
            *bindings.get_mut(action) = parse_action(action, raw);
        }

        Ok(Settings {
            bindings,
            menu_action,
        })
    }
}

/// Unknown tokens are skipped and repeated buttons collapse, so a file
/// written by another version still loads.
fn parse_action(action: Action, raw: &ActionV1) -> ActionBinding {
    let mut binding = ActionBinding::new();
    for token in &raw.buttons {
        let button = match token.trim().parse::<LogicalButton>() {
            Ok(button) => button,
            Err(e) => {
                warn!("{action}: skipping binding, {e}");
                continue;
            }
        };
        if binding.add(button).is_err() {
            warn!("{action}: {button} listed more than once");
        }
    }
    binding.set_enabled(raw.enabled);
    binding.set_block_built_in(raw.block_built_in);
    binding
}
