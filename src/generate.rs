use itertools::Itertools;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

pub const DEFAULT_POINTS: usize = 100;
pub const DEFAULT_DIMENSIONS: usize = 2;
pub const DEFAULT_LOW: f64 = -10.0;
pub const DEFAULT_HIGH: f64 = 10.0;

/// Synthetic demo dataset: every coordinate drawn independently and
/// uniformly from [low, high).
pub fn generate_dataset<R: Rng>(
    rng: &mut R,
    n: usize,
    dim: usize,
    low: f64,
    high: f64,
) -> Vec<Vec<f64>> {
    let range = Uniform::new(low, high);
    (0..n)
        .map(|_| (0..dim).map(|_| range.sample(rng)).collect_vec())
        .collect_vec()
}
