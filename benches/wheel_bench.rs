//! Wheel benchmark: Layout recomputation and spin frame mapping.
//!
//! Layout rebuild happens on every resize and a frame maps onto the ring
//! up to 60 times a second; both should stay far below a frame budget.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use luckywheel::{CellBuffer, LuckyWheel, Rect, SpinMachine, WheelGrid, Widget};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid_compute(c: &mut Criterion) {
    c.bench_function("grid_compute_square", |b| {
        b.iter(|| WheelGrid::compute(black_box(300), black_box(300)))
    });

    c.bench_function("grid_compute_wide", |b| {
        b.iter(|| WheelGrid::compute(black_box(500), black_box(180)))
    });
}

fn spin_frame_mapping(c: &mut Criterion) {
    let mut machine = SpinMachine::new();
    let mut rng = StdRng::seed_from_u64(42);
    let plan = machine.start_spin_with(&mut rng).unwrap();

    c.bench_function("spin_on_frame", |b| {
        let mut value = plan.from;
        b.iter(|| {
            value = (value + 1) % plan.to.max(1);
            machine.on_frame(black_box(value))
        })
    });
}

fn wheel_render(c: &mut Criterion) {
    let wheel = LuckyWheel::new(Rect::new(0, 0, 60, 30));
    let mut buf = CellBuffer::new(60, 30);

    c.bench_function("wheel_render_60x30", |b| {
        b.iter(|| {
            wheel.render(&mut buf);
            black_box(&buf);
        })
    });
}

criterion_group!(benches, grid_compute, spin_frame_mapping, wheel_render);
criterion_main!(benches);
