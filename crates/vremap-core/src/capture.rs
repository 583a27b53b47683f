use log::debug;
use vremap_input::LogicalButton;

/// One-shot capture of the next pressed button, used when the user is
/// assigning a new binding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    armed: bool,
    captured: Option<LogicalButton>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening. A previously captured button is discarded.
    pub fn arm(&mut self) {
        self.armed = true;
        self.captured = None;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Record `button` if armed. Returns `true` when this press completed
    /// the capture.
    pub fn on_press(&mut self, button: LogicalButton) -> bool {
        if !self.armed {
            return false;
        }
        debug!("captured {button}");
        self.armed = false;
        self.captured = Some(button);
        true
    }

    pub fn take(&mut self) -> Option<LogicalButton> {
        self.captured.take()
    }
}
