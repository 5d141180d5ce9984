use thiserror::Error;

/// Errors produced by the clustering engine. Every failure aborts the
/// offending call; no partial centroid/label pairs are returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// Requested centroid count is zero or exceeds the dataset size.
    #[error("invalid number of centroids: requested {k}, dataset has {n} points")]
    InvalidK { k: usize, n: usize },

    /// Label assignment requested against zero centroids.
    #[error("cannot assign labels against an empty centroid set")]
    EmptyCentroidSet,

    /// The KMeans++ weighted draw failed for a reason other than the
    /// handled all-zero-distance case.
    #[error("degenerate probability distribution during weighted sampling")]
    DegenerateProbability,

    /// Dataset, centroid, or label dimensions disagree with each other.
    #[error("shape mismatch: expected {expected}, actual {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl ClusterError {
    pub fn invalid_k(k: usize, n: usize) -> Self {
        Self::InvalidK { k, n }
    }

    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}
