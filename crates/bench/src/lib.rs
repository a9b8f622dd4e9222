use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const QUICK_SAMPLE_SIZE: usize = 15;
const QUICK_WARM_UP_MS: u64 = 100;
const QUICK_MEASURE_MS: u64 = 250;
const LONG_SAMPLE_SIZE: usize = 10;
const LONG_WARM_UP_MS: u64 = 500;
const LONG_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_quick_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(QUICK_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(QUICK_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(QUICK_MEASURE_MS));
}

pub fn apply_long_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LONG_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LONG_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LONG_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_ints<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(-1_000..=1_000)).collect()
}

pub fn random_ascii_text<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}
