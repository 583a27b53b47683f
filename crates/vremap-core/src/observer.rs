use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, error};
use vremap_input::LogicalButton;

/// Receives every button press after the frame's actions are dispatched.
pub trait PressObserver {
    fn on_press(&mut self, button: LogicalButton);
}

impl<F> PressObserver for F
where
    F: FnMut(LogicalButton),
{
    fn on_press(&mut self, button: LogicalButton) {
        self(button);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription#{}", self.0)
    }
}

/// Press observers in subscription order.
#[derive(Default)]
pub struct Observers {
    entries: Vec<(SubscriptionId, Box<dyn PressObserver>)>,
    next_id: u64,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: PressObserver + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        debug!("press observer {id} subscribed");
        id
    }

    /// Returns `false` for an unknown or already removed id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        before != self.entries.len()
    }

    /// Deliver `button` to every observer. A panicking observer is logged
    /// and the rest still run.
    pub fn notify(&mut self, button: LogicalButton) {
        for (id, observer) in &mut self.entries {
            let delivered = catch_unwind(AssertUnwindSafe(|| observer.on_press(button)));
            if delivered.is_err() {
                error!("press observer {id} panicked on {button}");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use LogicalButton::*;

    #[test]
    fn observers_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Rc::clone(&seen);
        observers.subscribe(move |b: LogicalButton| first.borrow_mut().push((1, b)));
        let second = Rc::clone(&seen);
        observers.subscribe(move |b: LogicalButton| second.borrow_mut().push((2, b)));

        observers.notify(RightB);
        assert_eq!(*seen.borrow(), vec![(1, RightB), (2, RightB)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();
        let counter = Rc::clone(&count);
        let id = observers.subscribe(move |_: LogicalButton| *counter.borrow_mut() += 1);

        observers.notify(LeftX);
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(LeftX);

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }

    #[test]
    fn panicking_observer_does_not_stop_the_rest() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();
        observers.subscribe(|_: LogicalButton| panic!("observer failure"));
        let sink = Rc::clone(&seen);
        observers.subscribe(move |b: LogicalButton| sink.borrow_mut().push(b));

        observers.notify(LeftGrip);
        observers.notify(RightGrip);
        assert_eq!(*seen.borrow(), vec![LeftGrip, RightGrip]);
    }
}
