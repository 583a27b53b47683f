use std::cell::RefCell;
use std::rc::Rc;

use colored::Colorize;
use vremap_config::Action;
use vremap_core::{ActionError, ActionHandler};

use crate::print_info;

/// Actions fired since the last drain, shared between handlers and the
/// replay loop.
pub(crate) type Fired = Rc<RefCell<Vec<Action>>>;

/// Toggles a simulated pause menu.
pub(crate) struct PauseToggle {
    paused: bool,
    fired: Fired,
}

impl PauseToggle {
    pub fn new(fired: Fired) -> Self {
        Self { paused: false, fired }
    }
}

impl ActionHandler for PauseToggle {
    fn handle(&mut self, action: Action) -> Result<(), ActionError> {
        self.paused = !self.paused;
        self.fired.borrow_mut().push(action);
        if self.paused {
            print_info!("{} game paused", action.to_string().bold());
        } else {
            print_info!("{} game resumed", action.to_string().bold());
        }
        Ok(())
    }
}

/// Restarts the simulated level. A second restart request on the same frame
/// is refused.
pub(crate) struct RestartLevel {
    fired: Fired,
    restarts: u32,
}

impl RestartLevel {
    pub fn new(fired: Fired) -> Self {
        Self {
            fired,
            restarts: 0,
        }
    }
}

impl ActionHandler for RestartLevel {
    fn handle(&mut self, action: Action) -> Result<(), ActionError> {
        // `fired` is drained once per frame.
        if self.fired.borrow().contains(&action) {
            return Err(ActionError::Unavailable(action));
        }
        self.restarts += 1;
        self.fired.borrow_mut().push(action);
        print_info!("{} level restarted ({})", action.to_string().bold(), self.restarts);
        Ok(())
    }
}
