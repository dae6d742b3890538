use bench::apply_runtime_config_for_size;
use bench::default_rng;
use bench::random_keys;
use bench::random_ranges;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use rand::Rng;
use rmq::RmqEngine;
use rmq::StaticRmq;
use rmq::Strategy;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

#[derive(Clone, Copy, Debug)]
enum Workload {
    NDiv4,
    N,
    NTimes4,
}

impl Workload {
    fn label(self) -> &'static str {
        match self {
            Self::NDiv4 => "n_div_4",
            Self::N => "n",
            Self::NTimes4 => "4n",
        }
    }

    fn query_count(self, n: usize) -> usize {
        match self {
            Self::NDiv4 => (n / 4).max(1),
            Self::N => n.max(1),
            Self::NTimes4 => (4 * n).max(1),
        }
    }
}

#[derive(Clone, Copy)]
enum Op {
    Query(usize, usize),
    Update(usize, i64),
}

fn bench_build_and_query<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    strategy: Strategy,
    size: usize,
    keys: &[i64],
    queries: &[(usize, usize)],
) {
    group.bench_function(BenchmarkId::new(strategy.name(), size), |bencher| {
        bencher.iter(|| {
            let rmq = RmqEngine::build(black_box(keys), strategy).unwrap();
            let mut acc = 0_usize;
            for &(l, r) in queries {
                acc ^= rmq.argmin(black_box(l), black_box(r)).unwrap();
            }
            black_box(acc);
        })
    });
}

fn bench_static(c: &mut Criterion) {
    let workloads = [Workload::NDiv4, Workload::N, Workload::NTimes4];
    let mut rng = default_rng();

    for workload in workloads {
        let mut group = c.benchmark_group(format!("rmq/workload/{}", workload.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let keys = random_keys(&mut rng, size, VALUE_RANGE);
            let queries = random_ranges(&mut rng, size, workload.query_count(size));

            for strategy in Strategy::ALL {
                // Quadratic overall; only worth timing on the smallest inputs.
                if strategy == Strategy::BruteForce && size > 4_096 {
                    continue;
                }
                bench_build_and_query(&mut group, strategy, size, &keys, &queries);
            }
        }

        group.finish();
    }
}

fn bench_dynamic(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("rmq/dynamic/half_updates");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let keys = random_keys(&mut rng, size, VALUE_RANGE);
        let ops: Vec<Op> = random_ranges(&mut rng, size, size)
            .into_iter()
            .map(|(l, r)| {
                if rng.random_bool(0.5) {
                    Op::Update(l, rng.random_range(VALUE_RANGE))
                } else {
                    Op::Query(l, r)
                }
            })
            .collect();

        for strategy in Strategy::ALL.into_iter().filter(|s| s.supports_update()) {
            group.bench_function(BenchmarkId::new(strategy.name(), size), |bencher| {
                bencher.iter(|| {
                    let mut rmq =
                        RmqEngine::build(black_box(keys.as_slice()), strategy).unwrap();
                    let mut acc = 0_usize;
                    for &op in &ops {
                        match op {
                            Op::Query(l, r) => acc ^= rmq.argmin(l, r).unwrap(),
                            Op::Update(pos, value) => rmq.update(pos, value).unwrap(),
                        }
                    }
                    black_box(acc);
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_static, bench_dynamic);
criterion_main!(benches);
