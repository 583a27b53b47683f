use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, error};
use thiserror::Error;
use vremap_bit_mask::Bitable;
use vremap_config::{Action, BindingSet};
use vremap_input::LogicalButton;

const ACTIONS: usize = <Action as Bitable>::COUNT;

/// Failure reported by an action handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Failed(String),
    #[error("{0} is not available right now")]
    Unavailable(Action),
}

/// Host callback run when a bound button is pressed.
pub trait ActionHandler {
    fn handle(&mut self, action: Action) -> Result<(), ActionError>;
}

impl<F> ActionHandler for F
where
    F: FnMut(Action) -> Result<(), ActionError>,
{
    fn handle(&mut self, action: Action) -> Result<(), ActionError> {
        self(action)
    }
}

/// Routes button presses to the handlers of enabled bindings.
pub struct ActionDispatcher {
    bindings: Arc<BindingSet>,
    handlers: [Option<Box<dyn ActionHandler>>; ACTIONS],
}

impl ActionDispatcher {
    pub fn new(bindings: Arc<BindingSet>) -> Self {
        Self {
            bindings,
            handlers: std::array::from_fn(|_| None),
        }
    }

    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: Arc<BindingSet>) {
        self.bindings = bindings;
    }

    /// Install the handler for `action`, returning the previous one.
    pub fn register<H>(&mut self, action: Action, handler: H) -> Option<Box<dyn ActionHandler>>
    where
        H: ActionHandler + 'static,
    {
        debug!("handler registered for {action}");
        self.handlers[action.index() as usize].replace(Box::new(handler))
    }

    pub fn unregister(&mut self, action: Action) -> Option<Box<dyn ActionHandler>> {
        self.handlers[action.index() as usize].take()
    }

    pub fn has_handler(&self, action: Action) -> bool {
        self.handlers[action.index() as usize].is_some()
    }

    /// Run the handler of every enabled binding containing `button`, in
    /// action order. Returns how many handlers completed successfully.
    ///
    /// Handler errors and panics are logged and never propagate.
    pub fn dispatch(&mut self, button: LogicalButton) -> usize {
        let mut completed = 0;
        for (action, binding) in self.bindings.iter() {
            if !binding.enabled() || !binding.contains(button) {
                continue;
            }
            let Some(handler) = self.handlers[action.index() as usize].as_mut() else {
                continue;
            };
            match catch_unwind(AssertUnwindSafe(|| handler.handle(action))) {
                Ok(Ok(())) => {
                    debug!("{button} triggered {action}");
                    completed += 1;
                }
                Ok(Err(e)) => error!("{action} handler failed on {button}: {e}"),
                Err(_) => error!("{action} handler panicked on {button}"),
            }
        }
        completed
    }
}

impl fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<Action> = Action::ALL
            .iter()
            .copied()
            .filter(|a| self.has_handler(*a))
            .collect();
        f.debug_struct("ActionDispatcher")
            .field("bindings", &self.bindings)
            .field("handlers", &registered)
            .finish()
    }
}
