use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use crossbeam_channel::{never, select, tick, unbounded, Receiver};
use vremap_config::{
    load_settings, Action, BindingSet, BindingStore, BindingsEvent, BindingsWatcher,
    SnapshotReceiver,
};
use vremap_core::Remapper;
use vremap_input::{Backend, ButtonSet, LogicalButton};

use crate::error::AppError;
use crate::handlers::{Fired, PauseToggle, RestartLevel};
use crate::trace::{load_trace, TraceFrame, TraceHand};
use crate::{print_debug, print_error, print_info, print_warning};

/// What happened on one replayed frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FrameReport {
    pub frame: u64,
    pub pressed: ButtonSet,
    pub fired: Vec<Action>,
    pub menu_down: bool,
    pub menu_held: bool,
    pub captured: Option<LogicalButton>,
}

/// Drives a [`Remapper`] from trace frames.
pub(crate) struct Replayer {
    remapper: Remapper<Backend>,
    fired: Fired,
    frame: u64,
}

impl Replayer {
    pub fn new(
        runtime: &str,
        bindings: Arc<BindingSet>,
        menu_action: Action,
        controllers: &[TraceHand],
    ) -> Self {
        let mut backend = Backend::for_runtime(runtime);
        if let Some(platform) = backend.as_virtual_mut() {
            for hand in controllers {
                if let Err(e) = platform.connect_controller(hand.hand()) {
                    print_error!("failed to connect {} controller: {e}", hand.hand());
                }
            }
        }

        let fired: Fired = Rc::default();
        let mut remapper = Remapper::new(backend, bindings, menu_action);
        remapper.register_handler(Action::Pause, PauseToggle::new(Rc::clone(&fired)));
        remapper.register_handler(Action::Restart, RestartLevel::new(Rc::clone(&fired)));
        remapper.subscribe(|button: LogicalButton| {
            print_debug!("pressed {button}");
        });

        Self {
            remapper,
            fired,
            frame: 0,
        }
    }

    pub fn follow(&mut self, updates: SnapshotReceiver) {
        self.remapper.follow(updates);
    }

    pub fn set_menu_action(&mut self, action: Action) {
        self.remapper.set_menu_action(action);
    }

    pub fn step(&mut self, frame: &TraceFrame) -> FrameReport {
        self.frame += 1;
        self.apply_hot_plug(frame);
        self.apply_held(frame);
        if frame.capture {
            self.remapper.arm_capture();
        }

        self.remapper.poll_frame();

        let fired = std::mem::take(&mut *self.fired.borrow_mut());
        FrameReport {
            frame: self.frame,
            pressed: self.remapper.pressed_this_frame(),
            fired,
            menu_down: self.remapper.query_edge(frame.native_menu_down),
            menu_held: self.remapper.query_level(frame.native_menu),
            captured: self.remapper.take_captured(),
        }
    }

    fn apply_hot_plug(&mut self, frame: &TraceFrame) {
        for hand in &frame.disconnect {
            let Some(platform) = self.remapper.platform_mut().as_virtual_mut() else {
                return;
            };
            let Some(handle) = platform.controller(hand.hand()) else {
                print_warning!("no {} controller to disconnect", hand.hand());
                continue;
            };
            if let Err(e) = platform.disconnect(handle) {
                print_error!("failed to disconnect {handle}: {e}");
                continue;
            }
            self.remapper.on_node_removed(hand.node());
        }
        for hand in &frame.connect {
            let Some(platform) = self.remapper.platform_mut().as_virtual_mut() else {
                return;
            };
            if let Err(e) = platform.connect_controller(hand.hand()) {
                print_error!("failed to connect {} controller: {e}", hand.hand());
                continue;
            }
            self.remapper.on_node_added(hand.node());
        }
    }

    fn apply_held(&mut self, frame: &TraceFrame) {
        let Some(platform) = self.remapper.platform_mut().as_virtual_mut() else {
            return;
        };
        platform.release_all();
        for token in &frame.held {
            let button = match token.parse::<LogicalButton>() {
                Ok(button) => button,
                Err(e) => {
                    print_warning!("frame {}: {e}", self.frame);
                    continue;
                }
            };
            if let Err(e) = platform.set_button(button, true) {
                print_debug!("frame {}: {button} not applied: {e}", self.frame);
            }
        }
    }
}

fn print_report(report: &FrameReport, was_held: bool) {
    let frame = report.frame;
    if !report.pressed.is_empty() {
        let pressed: Vec<&str> = report.pressed.iter().map(LogicalButton::token).collect();
        print_debug!("frame {frame}: pressed {}", pressed.join(", "));
    }
    for action in &report.fired {
        print_info!("frame {frame}: {} fired", action.to_string().green());
    }
    if report.menu_down {
        print_info!("frame {frame}: menu button down");
    }
    if report.menu_held != was_held {
        let state = if report.menu_held { "held" } else { "released" };
        print_info!("frame {frame}: menu button {state}");
    }
    if let Some(button) = report.captured {
        print_info!("frame {frame}: captured {}", button.token().cyan());
    }
}

fn apply_event(event: BindingsEvent, store: &mut BindingStore, replayer: &mut Replayer) {
    match event {
        BindingsEvent::Changed(settings) => {
            store.replace(settings.bindings);
            replayer.set_menu_action(settings.menu_action);
            print_info!("bindings reloaded");
        }
        BindingsEvent::Removed => {
            print_warning!("bindings file removed, keeping current bindings");
        }
        BindingsEvent::Error(e) => {
            print_error!("failed to reload bindings: {e}");
        }
    }
}

fn frame_interval(fps: u32) -> Result<Duration, AppError> {
    if fps == 0 {
        return Err(AppError::InvalidFps(fps));
    }
    Ok(Duration::from_secs_f64(1.0 / f64::from(fps)))
}

pub(crate) fn run(
    bindings: &Path,
    trace: &Path,
    fps: Option<u32>,
    watch: bool,
) -> Result<(), AppError> {
    let settings = load_settings(bindings)?;
    let trace = load_trace(trace)?;

    let ticker: Receiver<_> = match fps {
        Some(fps) => tick(frame_interval(fps)?),
        None => never(),
    };

    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })?;

    let mut store = BindingStore::new(settings.bindings);
    let mut replayer =
        Replayer::new(&trace.runtime, store.snapshot(), settings.menu_action, &trace.controllers);
    replayer.follow(store.subscribe());

    let (_watcher, mut events) = if watch {
        let (watcher, rx) = BindingsWatcher::new(bindings)?;
        print_info!("watching {}", bindings.display());
        (Some(watcher), rx)
    } else {
        (None, never())
    };

    print_info!("replaying {} trace entries", trace.frames.len());
    let frames = trace
        .frames
        .iter()
        .flat_map(|f| std::iter::repeat(f).take(f.repeat as usize));

    let mut menu_held = false;
    let mut fired = 0usize;
    for frame in frames {
        if fps.is_some() {
            loop {
                let mut closed = false;
                select! {
                    recv(stop_rx) -> _ => {
                        print_info!("stopped");
                        return Ok(());
                    }
                    recv(events) -> msg => match msg {
                        Ok(event) => apply_event(event, &mut store, &mut replayer),
                        Err(_) => closed = true,
                    },
                    recv(ticker) -> _ => break,
                }
                if closed {
                    events = never();
                }
            }
        } else {
            if stop_rx.try_recv().is_ok() {
                print_info!("stopped");
                return Ok(());
            }
            while let Ok(event) = events.try_recv() {
                apply_event(event, &mut store, &mut replayer);
            }
        }

        let report = replayer.step(frame);
        print_report(&report, menu_held);
        menu_held = report.menu_held;
        fired += report.fired.len();
    }

    print_info!("replayed {} frames, {fired} actions fired", replayer.frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vremap_config::parse_settings;

    use crate::trace::parse_trace;

    const BINDINGS: &str = r#"
version: 1
actions:
  pause:
    enabled: true
    block_built_in: true
    buttons: [R_A, L_Menu]
  restart:
    enabled: true
    buttons: [L_Menu, R_B]
"#;

    fn replay(trace: &str) -> Vec<FrameReport> {
        let settings = parse_settings(BINDINGS).unwrap();
        let trace = parse_trace(trace).unwrap();
        let mut replayer = Replayer::new(
            &trace.runtime,
            Arc::new(settings.bindings),
            settings.menu_action,
            &trace.controllers,
        );
        trace
            .frames
            .iter()
            .flat_map(|f| std::iter::repeat(f).take(f.repeat as usize))
            .map(|f| replayer.step(f))
            .collect()
    }

    #[test]
    fn shared_button_fires_both_actions() {
        let reports = replay(
            r#"
controllers: [left, right]
frames:
  - held: [L_Menu]
  - held: [L_Menu]
    repeat: 3
"#,
        );
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].fired, vec![Action::Pause, Action::Restart]);
        assert!(reports[0].menu_down);
        assert!(reports[1..].iter().all(|r| r.fired.is_empty() && r.menu_held));
    }

    #[test]
    fn blocking_hides_the_native_menu() {
        let reports = replay(
            r#"
controllers: [left, right]
frames:
  - native_menu: true
    native_menu_down: true
  - held: [R_A]
"#,
        );
        assert!(!reports[0].menu_held);
        assert!(reports[0].menu_down);
        assert!(reports[1].menu_held);
        assert_eq!(reports[1].pressed, ButtonSet::new(&[LogicalButton::RightA]));
    }

    #[test]
    fn unsupported_runtime_never_presses() {
        let reports = replay(
            r#"
runtime: OculusVR
controllers: [left, right]
frames:
  - held: [R_A]
    native_menu: true
"#,
        );
        assert!(reports[0].pressed.is_empty());
        assert!(reports[0].fired.is_empty());
        assert!(!reports[0].menu_held);
    }

    #[test]
    fn hot_plug_releases_and_recovers() {
        let reports = replay(
            r#"
controllers: [left, right]
frames:
  - held: [R_B]
  - held: [R_B]
    disconnect: [right]
  - held: [R_B]
    connect: [right]
"#,
        );
        assert_eq!(reports[0].fired, vec![Action::Restart]);
        assert!(reports[1].pressed.is_empty());
        assert_eq!(reports[2].fired, vec![Action::Restart]);
    }

    #[test]
    fn capture_reports_the_next_button() {
        let reports = replay(
            r#"
controllers: [left, right]
frames:
  - capture: true
  - held: [L_Stick, R_Trigger]
"#,
        );
        assert_eq!(reports[0].captured, None);
        assert_eq!(reports[1].captured, Some(LogicalButton::LeftStick));
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(matches!(frame_interval(0), Err(AppError::InvalidFps(0))));
        assert_eq!(frame_interval(50).unwrap(), Duration::from_millis(20));
    }
}
