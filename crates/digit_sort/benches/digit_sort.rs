use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_runtime_config, default_rng, random_with_digits};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use digit_sort::{DigitWeight, radix_sort, sort_range};
use rand::Rng;
use rand::rngs::StdRng;

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];
const VALUE_DIGITS: u32 = 9;

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    ManyDuplicates,
    NearlySorted1pctSwaps,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::ManyDuplicates => "many_duplicates",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::ManyDuplicates,
    Distribution::NearlySorted1pctSwaps,
];

type SortFn = fn(&mut [u64]);

fn run_radix_sort(data: &mut [u64]) {
    radix_sort(data).expect("radix_sort failed");
}

fn run_pure_msd(data: &mut [u64]) {
    let max = data.iter().copied().max().unwrap_or(0);
    let len = data.len();
    sort_range(data, DigitWeight::for_max(max), 0..len, true).expect("sort_range failed");
}

fn run_std_unstable(data: &mut [u64]) {
    data.sort_unstable();
}

const IMPLS: [(&str, SortFn); 3] = [
    ("radix_sort_tuned", run_radix_sort),
    ("msd_pure", run_pure_msd),
    ("std_unstable", run_std_unstable),
];

fn bench_digit_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("digit_sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_config(&mut group, size);
            let base = generate_dataset(dist, size, &mut default_rng());

            for &(name, sort) in &IMPLS {
                group.bench_function(BenchmarkId::new(name, size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            sort(&mut data);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }
        }

        group.finish();
    }
}

fn generate_dataset(dist: Distribution, size: usize, rng: &mut StdRng) -> Vec<u64> {
    match dist {
        Distribution::RandomUniform => (0..size)
            .map(|_| random_with_digits(rng, VALUE_DIGITS))
            .collect(),
        Distribution::ManyDuplicates => {
            let pool: Vec<u64> = (0..16).map(|_| random_with_digits(rng, VALUE_DIGITS)).collect();
            (0..size)
                .map(|_| pool[rng.random_range(0..pool.len())])
                .collect()
        }
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..size as u64).map(|i| i * 1000).collect();
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
            data
        }
    }
}

criterion_group!(benches, bench_digit_sort);
criterion_main!(benches);
