use std::sync::Arc;

use crossbeam_channel::TryRecvError;
use log::{debug, info};
use vremap_config::{Action, BindingSet, SnapshotReceiver};
use vremap_input::{ButtonSet, DeviceResolver, InputPlatform, LogicalButton, XrNode};

use crate::capture::Capture;
use crate::dispatcher::{ActionDispatcher, ActionHandler};
use crate::menu::MenuOverride;
use crate::observer::{Observers, PressObserver, SubscriptionId};
use crate::poller::FramePoller;

/// Per-frame input remapping engine.
///
/// The host calls [`Remapper::poll_frame`] once per frame, then asks
/// [`Remapper::query_edge`] and [`Remapper::query_level`] whenever its own
/// code wants to know about the menu button.
pub struct Remapper<P> {
    platform: P,
    resolver: DeviceResolver,
    poller: FramePoller,
    bindings: Arc<BindingSet>,
    updates: Option<SnapshotReceiver>,
    dispatcher: ActionDispatcher,
    observers: Observers,
    menu: MenuOverride,
    capture: Capture,
}

impl<P: InputPlatform> Remapper<P> {
    pub fn new(platform: P, bindings: Arc<BindingSet>, menu_action: Action) -> Self {
        let poller = FramePoller::new(bindings.referenced_buttons());
        Self {
            platform,
            resolver: DeviceResolver::new(),
            poller,
            dispatcher: ActionDispatcher::new(Arc::clone(&bindings)),
            bindings,
            updates: None,
            observers: Observers::new(),
            menu: MenuOverride::new(menu_action),
            capture: Capture::new(),
        }
    }

    /// Take binding replacements from `updates`, typically
    /// `BindingStore::subscribe`. They are applied at the start of each
    /// frame.
    #[must_use]
    pub fn with_updates(mut self, updates: SnapshotReceiver) -> Self {
        self.updates = Some(updates);
        self
    }

    pub fn follow(&mut self, updates: SnapshotReceiver) {
        self.updates = Some(updates);
    }

    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }

    /// Swap in a new binding set. The active button set is recomputed.
    pub fn apply_bindings(&mut self, bindings: Arc<BindingSet>) {
        self.dispatcher.set_bindings(Arc::clone(&bindings));
        self.bindings = bindings;
        self.refresh_active();
    }

    /// Apply the newest pending snapshot, if any. Returns whether the
    /// bindings changed.
    pub fn sync_bindings(&mut self) -> bool {
        let Some(updates) = &self.updates else {
            return false;
        };
        let mut latest = None;
        let disconnected = loop {
            match updates.try_recv() {
                Ok(set) => latest = Some(set),
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };
        if disconnected {
            debug!("binding updates closed");
            self.updates = None;
        }
        match latest {
            Some(set) => {
                self.apply_bindings(set);
                true
            }
            None => false,
        }
    }

    /// Sample input for this frame, then deliver every press in ordinal
    /// order: first to the action handlers, then to observers.
    pub fn poll_frame(&mut self) {
        self.sync_bindings();

        let pressed = self.poller.poll(&self.platform, &mut self.resolver);
        if pressed.is_empty() {
            return;
        }

        let mut captured = false;
        for button in pressed {
            self.dispatcher.dispatch(button);
            self.observers.notify(button);
            captured |= self.capture.on_press(button);
        }
        if captured {
            self.refresh_active();
        }
    }

    #[inline]
    pub fn is_held(&self, button: LogicalButton) -> bool {
        self.poller.is_held(button)
    }

    #[inline]
    pub fn pressed_this_frame(&self) -> ButtonSet {
        self.poller.pressed_this_frame()
    }

    /// Buttons whose presses are delivered.
    pub fn active_buttons(&self) -> ButtonSet {
        self.poller.active()
    }

    /// Whether the menu button went down this frame, given the host's
    /// native answer.
    pub fn query_edge(&self, native: bool) -> bool {
        self.menu
            .query_edge(native, &self.bindings, self.poller.pressed_this_frame())
    }

    /// Whether the menu button is held, given the host's native answer.
    pub fn query_level(&self, native: bool) -> bool {
        self.menu
            .query_level(native, &self.bindings, |b| self.poller.is_held(b))
    }

    pub fn menu_action(&self) -> Action {
        self.menu.action()
    }

    pub fn set_menu_action(&mut self, action: Action) {
        self.menu.set_action(action);
    }

    pub fn on_node_added(&mut self, node: XrNode) {
        if node.is_hand() {
            info!("controller connected: {node:?}");
            self.resolver.invalidate_all();
        }
    }

    pub fn on_node_removed(&mut self, node: XrNode) {
        if node.is_hand() {
            info!("controller disconnected: {node:?}");
            self.resolver.invalidate_all();
        }
    }

    pub fn register_handler<H>(&mut self, action: Action, handler: H) -> Option<Box<dyn ActionHandler>>
    where
        H: ActionHandler + 'static,
    {
        self.dispatcher.register(action, handler)
    }

    pub fn unregister_handler(&mut self, action: Action) -> Option<Box<dyn ActionHandler>> {
        self.dispatcher.unregister(action)
    }

    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: PressObserver + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Listen for the next button press on any button.
    pub fn arm_capture(&mut self) {
        self.capture.arm();
        self.refresh_active();
    }

    pub fn cancel_capture(&mut self) {
        self.capture.cancel();
        self.refresh_active();
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_armed()
    }

    pub fn take_captured(&mut self) -> Option<LogicalButton> {
        self.capture.take()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn resolver(&self) -> &DeviceResolver {
        &self.resolver
    }

    fn refresh_active(&mut self) {
        let active = if self.capture.is_armed() {
            ButtonSet::all()
        } else {
            self.bindings.referenced_buttons()
        };
        if active != self.poller.active() {
            debug!("{} buttons active", active.count());
            self.poller.set_active(active);
        }
    }
}
