// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_strtree::{Interval, SirTreeF64, SirTreeI64};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_tiled_intervals(n: usize, width: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x0 = i as f64 * width;
            (x0, x0 + width)
        })
        .collect()
}

fn gen_random_intervals(count: usize, span: f64, max_len: f64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * span;
            (x0, x0 + rng.next_f64() * max_len)
        })
        .collect()
}

fn gen_clustered_intervals(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let c = rng.next_f64() * 100_000.0;
        for _ in 0..per_cluster {
            let x0 = c + (rng.next_f64() - 0.5) * spread;
            out.push((x0, x0 + 4.0));
        }
    }
    out
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("sir_f64");
    for &n in &[1_024usize, 16_384, 131_072] {
        let intervals = gen_tiled_intervals(n, 10.0);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[4usize, 10, 32] {
            group.bench_function(format!("build_query_n{}_cap{}", n, capacity), |b| {
                b.iter_batched(
                    || SirTreeF64::<u32>::with_node_capacity(capacity).unwrap(),
                    |mut tree| {
                        for (i, &(x0, x1)) in intervals.iter().enumerate() {
                            tree.insert(x0, x1, i as u32).unwrap();
                        }
                        let hits = tree.query(1_000.0, 5_000.0).len();
                        black_box(hits);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let intervals = gen_random_intervals(65_536, 1_000_000.0, 500.0);
    group.bench_function("build_query_random", |b| {
        b.iter_batched(
            SirTreeF64::<u32>::new,
            |mut tree| {
                for (i, &(x0, x1)) in intervals.iter().enumerate() {
                    tree.insert(x0, x1, i as u32).unwrap();
                }
                let hits = tree.query(400_000.0, 410_000.0).len();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("sir_f64_query_heavy");
    let intervals = gen_clustered_intervals(64, 1_024, 2_000.0);
    group.bench_function("build_then_many_queries", |b| {
        b.iter_batched(
            || {
                let mut tree = SirTreeF64::<u32>::new();
                for (i, &(x0, x1)) in intervals.iter().enumerate() {
                    tree.insert(x0, x1, i as u32).unwrap();
                }
                tree.build();
                tree
            },
            |tree| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = q as f64 * 400.0;
                    tree.query_with(&Interval::new(x, x + 200.0), |_| total += 1);
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("sir_i64");
    let n = 65_536_i64;
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("build_query_tiled", |b| {
        b.iter_batched(
            SirTreeI64::<u32>::new,
            |mut tree| {
                for i in 0..n {
                    tree.insert(i * 8, i * 8 + 12, i as u32).unwrap();
                }
                let hits = tree.query(100_000, 140_000).len();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build_query, bench_query_heavy, bench_i64);
criterion_main!(benches);
