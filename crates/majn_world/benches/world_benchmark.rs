//! Benchmark for chunk generation and world lookups.
//!
//! Run with: cargo bench --package majn_world --bench world_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use majn_world::{ChunkCoord, ChunkDims, FlatTerrain, World};

fn benchmark_chunk_generation(c: &mut Criterion) {
    let terrain = FlatTerrain;

    c.bench_function("flat_chunk_generation", |b| {
        let mut x = 0i32;
        b.iter(|| {
            x = x.wrapping_add(1);
            black_box(terrain.generate(ChunkCoord::new(x, 0, -x), ChunkDims::DEFAULT))
        });
    });
}

fn benchmark_cached_lookup(c: &mut Criterion) {
    let mut world = World::new();
    // Warm a 3x3 neighbourhood so every lookup below is a cache hit.
    black_box(world.chunks_near(0, 0, 0).len());

    let mut group = c.benchmark_group("world_lookup");
    group.throughput(Throughput::Elements(48 * 16 * 48));
    group.bench_function("cached_get_block", |b| {
        b.iter(|| {
            for x in -16..32 {
                for y in 0..16 {
                    for z in -16..32 {
                        black_box(world.get_block(x, y, z));
                    }
                }
            }
        });
    });
    group.finish();
}

fn benchmark_chunks_near(c: &mut Criterion) {
    c.bench_function("chunks_near_cold", |b| {
        b.iter(|| {
            let mut world = World::new();
            black_box(world.chunks_near(0, 8, 0).len())
        });
    });
}

criterion_group!(
    benches,
    benchmark_chunk_generation,
    benchmark_cached_lookup,
    benchmark_chunks_near
);
criterion_main!(benches);
