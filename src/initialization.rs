use itertools::Itertools;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::distance::{assign_labels, euclidian_distance, squared_euclidian_distance};
use crate::error::ClusterError;

/// Strategy for producing the initial centroid set. Caller-supplied manual
/// centroids are not a strategy; the boundary layer passes those through
/// without touching this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMethod {
    Random,
    FarthestFirst,
    KMeansPlusPlus,
}

/// Produces k centroids from the dataset and the matching label assignment.
pub fn initialize_centroids<R: Rng>(
    method: InitMethod,
    k: usize,
    data: &[Vec<f64>],
    rng: &mut R,
) -> Result<(Vec<Vec<f64>>, Vec<usize>), ClusterError> {
    if k == 0 || k > data.len() {
        return Err(ClusterError::invalid_k(k, data.len()));
    }

    let centroids = match method {
        InitMethod::Random => random_centroids(data, k, rng),
        InitMethod::FarthestFirst => farthest_first(data, k, rng),
        InitMethod::KMeansPlusPlus => kmeans_plusplus(data, k, rng)?,
    };

    // Relabel so the centroid/label pair leaves the engine matched
    let labels = assign_labels(data, &centroids)?;
    Ok((centroids, labels))
}

fn random_centroids<R: Rng>(data: &[Vec<f64>], k: usize, rng: &mut R) -> Vec<Vec<f64>> {
    // k distinct points, uniformly without replacement
    rand::seq::index::sample(rng, data.len(), k)
        .into_iter()
        .map(|idx| data[idx].clone())
        .collect_vec()
}

fn farthest_first<R: Rng>(data: &[Vec<f64>], k: usize, rng: &mut R) -> Vec<Vec<f64>> {
    let mut centroids: Vec<Vec<f64>> = Vec::new();

    // Randomly select the first centroid
    let first_idx = rng.gen_range(0..data.len());
    centroids.push(data[first_idx].clone());

    // Each following pick is deterministic: the point maximizing the
    // minimum distance to the already-chosen centroids
    for _ in 1..k {
        let mut best_idx = 0;
        let mut best_distance = f64::MIN;
        for (idx, point) in data.iter().enumerate() {
            let distance = centroids
                .iter()
                .map(|centroid| euclidian_distance(point, centroid))
                .fold(f64::MAX, f64::min);
            if distance > best_distance {
                best_distance = distance;
                best_idx = idx;
            }
        }
        centroids.push(data[best_idx].clone());
    }

    centroids
}

fn kmeans_plusplus<R: Rng>(
    data: &[Vec<f64>],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Vec<f64>>, ClusterError> {
    let mut centroids: Vec<Vec<f64>> = Vec::new();

    // Randomly select the first centroid
    let first_idx = rng.gen_range(0..data.len());
    centroids.push(data[first_idx].clone());

    if k == 1 {
        return Ok(centroids);
    }

    let mut min_distances = vec![f64::MAX; data.len()];

    // Select the k-1 remaining centroids, each weighted by the squared
    // distance to its nearest already-chosen centroid
    for _ in 1..k {
        let newest = &centroids[centroids.len() - 1];
        for (idx, min_dist) in min_distances.iter_mut().enumerate() {
            let distance = squared_euclidian_distance(&data[idx], newest);
            *min_dist = (*min_dist).min(distance);
        }

        let next_idx = sample_weighted(&min_distances, rng)?;
        centroids.push(data[next_idx].clone());
    }

    Ok(centroids)
}

fn sample_weighted<R: Rng>(weights: &[f64], rng: &mut R) -> Result<usize, ClusterError> {
    // Every point coincides with a chosen centroid; the distribution is
    // undefined, so fall back to a uniform draw
    if weights.iter().all(|&w| w == 0.0) {
        return Ok(rng.gen_range(0..weights.len()));
    }

    let dist = WeightedIndex::new(weights).map_err(|_| ClusterError::DegenerateProbability)?;
    Ok(dist.sample(rng))
}
