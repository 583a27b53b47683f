use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;
use vremap_input::LogicalButton;

use crate::action::Action;
use crate::binding::{ActionBinding, BindingError};
use crate::set::BindingSet;

/// Receiving end for binding set replacements.
pub type SnapshotReceiver = Receiver<Arc<BindingSet>>;

/// Owner of the user's binding set.
///
/// Every successful mutation calls [`BindingStore::changed`], which sends the
/// whole new set to each subscriber.
#[derive(Debug, Default)]
pub struct BindingStore {
    set: Arc<BindingSet>,
    subscribers: Vec<Sender<Arc<BindingSet>>>,
}

impl BindingStore {
    pub fn new(set: BindingSet) -> Self {
        Self {
            set: Arc::new(set),
            subscribers: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &BindingSet {
        &self.set
    }

    /// Shared snapshot of the current set.
    pub fn snapshot(&self) -> Arc<BindingSet> {
        Arc::clone(&self.set)
    }

    /// Subscribe to replacements. Dropped receivers are cleaned up on the
    /// next broadcast.
    pub fn subscribe(&mut self) -> SnapshotReceiver {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn add_binding(
        &mut self,
        action: Action,
        button: LogicalButton,
    ) -> Result<(), BindingError> {
        self.try_edit(action, |b| b.add(button))
    }

    /// Returns `false` when the button was not bound; nothing is broadcast
    /// in that case.
    pub fn remove_binding(&mut self, action: Action, button: LogicalButton) -> bool {
        if !self.set.get(action).contains(button) {
            return false;
        }
        self.edit(action, |b| b.remove(button))
    }

    pub fn set_bindings(
        &mut self,
        action: Action,
        buttons: &[LogicalButton],
    ) -> Result<(), BindingError> {
        self.try_edit(action, |b| b.set(buttons))
    }

    pub fn reset(&mut self, action: Action) {
        self.edit(action, ActionBinding::reset);
    }

    pub fn set_enabled(&mut self, action: Action, enabled: bool) {
        self.edit(action, |b| b.set_enabled(enabled));
    }

    pub fn set_block_built_in(&mut self, action: Action, block: bool) {
        self.edit(action, |b| b.set_block_built_in(block));
    }

    /// Replace the whole set, e.g. after reloading it from disk.
    pub fn replace(&mut self, set: BindingSet) {
        self.set = Arc::new(set);
        self.changed();
    }

    /// Broadcast the current set to subscribers.
    pub fn changed(&mut self) {
        let snapshot = &self.set;
        self.subscribers
            .retain(|tx| tx.send(Arc::clone(snapshot)).is_ok());
        debug!("bindings changed, {} subscribers notified", self.subscribers.len());
    }

    fn edit<T, F>(&mut self, action: Action, f: F) -> T
    where
        F: FnOnce(&mut ActionBinding) -> T,
    {
        let mut binding = self.set.get(action).clone();
        let out = f(&mut binding);
        self.commit(action, &binding);
        out
    }

    // Mutations go through a private copy, so a failed edit never reaches
    // subscribers or readers of the current snapshot.
    fn try_edit<T, F>(&mut self, action: Action, f: F) -> Result<T, BindingError>
    where
        F: FnOnce(&mut ActionBinding) -> Result<T, BindingError>,
    {
        let mut binding = self.set.get(action).clone();
        let out = f(&mut binding)?;
        self.commit(action, &binding);
        Ok(out)
    }

    fn commit(&mut self, action: Action, binding: &ActionBinding) {
        if binding != self.set.get(action) {
            Arc::make_mut(&mut self.set).get_mut(action).clone_from(binding);
            self.changed();
        }
    }
}
