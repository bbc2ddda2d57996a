use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fast_billboards::core::{InputEvent, InputTracker, Navigator};
use fast_billboards::traits::Button;
use fast_billboards::Camera;
use glam::Vec3;

fn initial() -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
}

/// Benchmark: one call of each gesture
fn bench_single_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");

    group.bench_function("zoom", |b| {
        let mut camera = initial();
        b.iter(|| {
            camera.zoom(black_box(0.3));
            camera.zoom(black_box(-0.3));
        })
    });
    group.bench_function("strafe", |b| {
        let mut camera = initial();
        b.iter(|| {
            camera.strafe_horiz(black_box(0.3));
            camera.strafe_vert(black_box(-0.3));
        })
    });
    group.bench_function("pitch_yaw", |b| {
        let mut camera = initial();
        b.iter(|| {
            camera.pitch(black_box(0.5));
            camera.yaw(black_box(-0.5));
        })
    });
    group.bench_function("roll", |b| {
        let mut camera = initial();
        b.iter(|| camera.roll(black_box(5.0)))
    });
    group.bench_function("orthonormalize", |b| {
        let mut camera = initial();
        b.iter(|| camera.orthonormalize())
    });

    group.finish();
}

/// Benchmark: a frame's worth of mouse drag events through the navigator
fn bench_drag_frame(c: &mut Criterion) {
    let mut tracker = InputTracker::new();
    tracker.process_event(&InputEvent::Pressed(Button::MouseLeft));
    let events: Vec<InputEvent> = (0..16)
        .map(|i| InputEvent::MouseMotion {
            dx: (i % 5) as f32 - 2.0,
            dy: (i % 3) as f32 - 1.0,
        })
        .collect();

    c.bench_function("drag_frame_16_events", |b| {
        let mut camera = initial();
        let mut nav = Navigator::default();
        b.iter(|| {
            for event in &events {
                black_box(nav.handle(&mut camera, event, &tracker));
            }
        })
    });
}

criterion_group!(benches, bench_single_gestures, bench_drag_frame);
criterion_main!(benches);
