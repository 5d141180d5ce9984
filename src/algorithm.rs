use itertools::Itertools;

use crate::distance::assign_labels;
use crate::error::ClusterError;

// numpy allclose defaults, which the convergence check is calibrated against
const ATOL: f64 = 1e-8;
const RTOL: f64 = 1e-5;

/// Defensive bound for `run_to_convergence`. Lloyd's algorithm settles far
/// below this on well-posed inputs; the cap only guards against oscillating
/// centroid configurations.
pub const MAX_ITERATIONS: usize = 500;

/// One Lloyd iteration: rebuild every centroid as the mean of its assigned
/// points, then relabel the whole dataset against the new set. A cluster
/// with no assigned points collapses to the origin. Inputs are not mutated.
pub fn step(
    data: &[Vec<f64>],
    centroids: &[Vec<f64>],
    labels: &[usize],
) -> Result<(Vec<Vec<f64>>, Vec<usize>), ClusterError> {
    if centroids.is_empty() {
        return Err(ClusterError::EmptyCentroidSet);
    }
    if labels.len() != data.len() {
        return Err(ClusterError::shape_mismatch(data.len(), labels.len()));
    }

    let k = centroids.len();
    let dims = centroids[0].len();

    let mut sums = vec![vec![0.0; dims]; k];
    let mut cluster_sizes = vec![0usize; k];
    for (point, &label) in data.iter().zip(labels.iter()) {
        if label >= k {
            return Err(ClusterError::shape_mismatch(k, label));
        }
        if point.len() != dims {
            return Err(ClusterError::shape_mismatch(dims, point.len()));
        }
        for (sum, value) in sums[label].iter_mut().zip(point.iter()) {
            *sum += *value;
        }
        cluster_sizes[label] += 1;
    }

    let mut new_centroids = Vec::with_capacity(k);
    for (sum, &size) in sums.iter().zip(cluster_sizes.iter()) {
        if size > 0 {
            new_centroids.push(sum.iter().map(|value| value / size as f64).collect_vec());
        } else {
            // Orphaned cluster resets to the zero vector
            new_centroids.push(vec![0.0; dims]);
        }
    }

    let new_labels = assign_labels(data, &new_centroids)?;
    Ok((new_centroids, new_labels))
}

/// Element-wise closeness within `ATOL + RTOL * |reference|`.
pub fn allclose(us: &[Vec<f64>], them: &[Vec<f64>]) -> bool {
    if us.len() != them.len() {
        return false;
    }
    us.iter().zip(them.iter()).all(|(a, b)| {
        a.len() == b.len()
            && a.iter()
                .zip(b.iter())
                .all(|(x, y)| (x - y).abs() <= ATOL + RTOL * y.abs())
    })
}

/// Repeats `step` until the centroids reach a fixed point.
pub fn run_to_convergence(
    data: &[Vec<f64>],
    centroids: &[Vec<f64>],
    labels: &[usize],
) -> Result<(Vec<Vec<f64>>, Vec<usize>), ClusterError> {
    let mut centroids = centroids.to_vec();
    let mut labels = labels.to_vec();

    for iter in 0..MAX_ITERATIONS {
        let (new_centroids, new_labels) = step(data, &centroids, &labels)?;
        let converged = allclose(&centroids, &new_centroids);
        centroids = new_centroids;
        labels = new_labels;
        if converged {
            log::info!("Converged after {} iterations", iter + 1);
            return Ok((centroids, labels));
        }
    }

    log::warn!(
        "No fixed point after {} iterations, returning the latest centroids",
        MAX_ITERATIONS
    );
    Ok((centroids, labels))
}
