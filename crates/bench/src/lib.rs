use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT_LEN: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, input_len: usize) {
    if input_len < LARGE_INPUT_LEN {
        group.sampling_mode(SamplingMode::Auto);
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Uniform value with exactly `digits` decimal digits (`0..=9` for one digit).
pub fn random_with_digits<R: Rng + ?Sized>(rng: &mut R, digits: u32) -> u64 {
    let digits = digits.clamp(1, 20);
    if digits == 1 {
        return rng.random_range(0..=9);
    }

    let min = 10_u64.pow(digits - 1);
    let max = if digits >= 20 {
        u64::MAX
    } else {
        10_u64.pow(digits) - 1
    };
    rng.random_range(min..=max)
}
