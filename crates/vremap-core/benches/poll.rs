use std::sync::Arc;

use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use vremap_config::{Action, ActionBinding, BindingSet};
use vremap_core::{ActionError, Remapper};
use vremap_input::{Hand, LogicalButton, VirtualPlatform};

fn build_bindings() -> BindingSet {
    let pause = ActionBinding::with_buttons(&[LogicalButton::RightA, LogicalButton::LeftMenu])
        .unwrap_or_default();
    let restart = ActionBinding::with_buttons(&[LogicalButton::LeftMenu, LogicalButton::RightB])
        .unwrap_or_default();
    BindingSet::new()
        .with(Action::Pause, pause)
        .with(Action::Restart, restart)
}

fn build_remapper() -> Remapper<VirtualPlatform> {
    let mut platform = VirtualPlatform::new();
    platform.connect_controller(Hand::Left).unwrap();
    platform.connect_controller(Hand::Right).unwrap();
    let mut remapper = Remapper::new(platform, Arc::new(build_bindings()), Action::Pause);
    remapper.register_handler(Action::Pause, |a: Action| -> Result<(), ActionError> {
        black_box(a);
        Ok(())
    });
    remapper.register_handler(Action::Restart, |a: Action| -> Result<(), ActionError> {
        black_box(a);
        Ok(())
    });
    remapper
}

pub fn bench_idle_frame(c: &mut Criterion) {
    let mut remapper = build_remapper();
    c.bench_function("poll_frame_idle", |b| {
        b.iter(|| {
            remapper.poll_frame();
            black_box(remapper.query_level(black_box(false)));
        });
    });
}

pub fn bench_press_release(c: &mut Criterion) {
    let mut remapper = build_remapper();
    c.bench_function("poll_frame_press_release", |b| {
        b.iter(|| {
            let _ = remapper
                .platform_mut()
                .set_button(LogicalButton::LeftMenu, true);
            remapper.poll_frame();
            black_box(remapper.query_edge(black_box(false)));
            let _ = remapper
                .platform_mut()
                .set_button(LogicalButton::LeftMenu, false);
            remapper.poll_frame();
        });
    });
}

pub fn bench_held_frame(c: &mut Criterion) {
    let mut remapper = build_remapper();
    let _ = remapper.platform_mut().set_button(LogicalButton::RightA, true);
    c.bench_function("poll_frame_held", |b| {
        b.iter(|| {
            remapper.poll_frame();
            black_box(remapper.is_held(LogicalButton::RightA));
        });
    });
}

criterion_group!(benches, bench_idle_frame, bench_press_release, bench_held_frame);
criterion_main!(benches);
