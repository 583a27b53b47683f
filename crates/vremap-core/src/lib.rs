mod capture;
mod dispatcher;
mod engine;
mod menu;
mod observer;
mod poller;
mod state;

pub use capture::Capture;
pub use dispatcher::{ActionDispatcher, ActionError, ActionHandler};
pub use engine::Remapper;
pub use menu::MenuOverride;
pub use observer::{Observers, PressObserver, SubscriptionId};
pub use poller::FramePoller;
pub use state::{ButtonStates, Transition};
