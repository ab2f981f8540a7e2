//! Criterion benchmarks for the equal-area split.
//! Sizes n in {100, 1_000, 10_000}; boundary cardinality either capped at 100
//! levels per axis or growing with n.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use squaresplit::prelude::*;

fn squares(count: usize, levels: usize, seed: u64) -> Vec<Square> {
    let cfg = SquaresCfg {
        count,
        levels,
        spacing: 1.0,
        max_side_steps: 10,
    };
    draw_squares(cfg, ReplayToken { seed, index: 0 })
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for &n in &[100usize, 1_000, 10_000] {
        for (label, levels) in [("levels100", 100usize), ("levels_n", n.max(100))] {
            let id = format!("{label}/{n}");
            group.bench_with_input(
                BenchmarkId::new("find_horizontal_line", &id),
                &n,
                |b, &n| {
                    b.iter_batched(
                        || squares(n, levels, 17),
                        |sq| {
                            let _y = find_horizontal_line(&sq).unwrap();
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
            group.bench_with_input(BenchmarkId::new("union_area", &id), &n, |b, &n| {
                b.iter_batched(
                    || squares(n, levels, 18),
                    |sq| {
                        let _a = union_area(&sq).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
