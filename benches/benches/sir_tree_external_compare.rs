// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_strtree::SirTreeF64;

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_tiled_intervals(n: usize, width: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x0 = i as f64 * width;
            (x0, x0 + width)
        })
        .collect()
}

// rstar has no one-dimensional envelope, so intervals become zero-height rectangles.
fn to_rstar_rects(v: &[(f64, f64)]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|&(x0, x1)| Rectangle::from_corners([x0, 0.0], [x1, 0.0]))
        .collect()
}

fn bench_sir_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("sir_external_compare_f64");
    for &n in &[4_096usize, 65_536] {
        let intervals = gen_tiled_intervals(n, 10.0);
        let (q0, q1) = (1_000.0, 5_000.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                SirTreeF64::<u32>::new,
                |mut tree| {
                    for (i, &(x0, x1)) in intervals.iter().enumerate() {
                        tree.insert(x0, x1, i as u32).unwrap();
                    }
                    let hits: usize = tree.query(q0, q1).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&intervals),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners([q0, 0.0], [q1, 0.0]);
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sir_external_compare_f64);
criterion_main!(benches);
