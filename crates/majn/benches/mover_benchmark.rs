//! Benchmark for collision sampling and movement resolution.
//!
//! Run with: cargo bench --package majn --bench mover_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use majn::{Mover, MoverConfig};
use majn_world::World;

fn benchmark_is_colliding(c: &mut Criterion) {
    let mut world = World::new();
    let mover = Mover::new([8.5, 11.0, 8.5], MoverConfig::default());
    // Generate the chunks under the samples up front.
    black_box(mover.is_colliding(8.5, 11.0, 8.5, Some(&mut world)));

    c.bench_function("is_colliding_18_samples", |b| {
        b.iter(|| black_box(mover.is_colliding(8.5, black_box(11.0), 8.5, Some(&mut world))));
    });
}

fn benchmark_walk(c: &mut Criterion) {
    c.bench_function("walk_100_frames", |b| {
        let mut world = World::new();
        b.iter(|| {
            let mut mover = Mover::new([8.5, 11.0, 8.5], MoverConfig::default());
            for _ in 0..100 {
                black_box(mover.move_relative(0.1, 0.05, -0.05, Some(&mut world)));
            }
            black_box(mover.position())
        });
    });
}

criterion_group!(benches, benchmark_is_colliding, benchmark_walk);
criterion_main!(benches);
