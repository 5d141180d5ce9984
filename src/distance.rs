use crate::error::ClusterError;

pub fn euclidian_distance(us: &[f64], them: &[f64]) -> f64 {
    us.iter()
        .zip(them.iter())
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

pub fn squared_euclidian_distance(us: &[f64], them: &[f64]) -> f64 {
    us.iter()
        .zip(them.iter())
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum::<f64>()
}

/// Index of the closest centroid; ties go to the lowest index.
pub fn nearest_centroid(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best_idx = 0;
    let mut best_distance = f64::MAX;
    for (idx, centroid) in centroids.iter().enumerate() {
        let distance = euclidian_distance(point, centroid);
        if distance < best_distance {
            best_distance = distance;
            best_idx = idx;
        }
    }
    best_idx
}

pub fn assign_labels(
    data: &[Vec<f64>],
    centroids: &[Vec<f64>],
) -> Result<Vec<usize>, ClusterError> {
    if centroids.is_empty() {
        return Err(ClusterError::EmptyCentroidSet);
    }

    let dims = centroids[0].len();
    for centroid in centroids {
        if centroid.len() != dims {
            return Err(ClusterError::shape_mismatch(dims, centroid.len()));
        }
    }

    let mut labels = Vec::with_capacity(data.len());
    for point in data {
        if point.len() != dims {
            return Err(ClusterError::shape_mismatch(dims, point.len()));
        }
        labels.push(nearest_centroid(point, centroids));
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_centroid_breaks_ties_towards_lowest_index() {
        let centroids = vec![vec![1.0, 0.0], vec![-1.0, 0.0]];
        assert_eq!(nearest_centroid(&[0.0, 0.0], &centroids), 0);
    }

    #[test]
    fn assign_labels_matches_worked_example() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![10.0, 1.0],
        ];
        let centroids = vec![vec![0.0, 0.0], vec![10.0, 0.0]];
        let labels = assign_labels(&data, &centroids).unwrap();
        assert_eq!(labels, vec![0, 0, 1, 1]);
    }

    #[test]
    fn assign_labels_is_idempotent() {
        let data = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![-5.0, 0.5]];
        let centroids = vec![vec![0.0, 0.0], vec![4.0, 4.0]];
        let first = assign_labels(&data, &centroids).unwrap();
        let second = assign_labels(&data, &centroids).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn assign_labels_rejects_empty_centroid_set() {
        let data = vec![vec![0.0, 0.0]];
        assert_eq!(
            assign_labels(&data, &[]),
            Err(ClusterError::EmptyCentroidSet)
        );
    }

    #[test]
    fn assign_labels_rejects_mismatched_dimensions() {
        let data = vec![vec![0.0, 0.0, 0.0]];
        let centroids = vec![vec![0.0, 0.0]];
        assert_eq!(
            assign_labels(&data, &centroids),
            Err(ClusterError::shape_mismatch(2, 3))
        );
    }
}
