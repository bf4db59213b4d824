#![allow(dead_code)]

use criterion::PlotConfiguration;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::ThreadRng;

// the last step is capped at the supported input ceiling instead of 1 << 20
pub const SIZES: [usize; 7] = [
    1 << 8,
    1 << 10,
    1 << 12,
    1 << 14,
    1 << 16,
    1 << 18,
    1_000_000,
];

pub fn fill_random_vec(rng: &mut ThreadRng, len: usize) -> Vec<i64> {
    let sample = Uniform::new(i64::MIN, i64::MAX);

    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(sample.sample(rng));
    }

    vec
}

pub fn plot_config() -> PlotConfiguration {
    PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic)
}
