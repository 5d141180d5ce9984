//! Boundary contract for transport shells. Each operation is a pure
//! function over serializable data; the shell owns parsing, routing, and
//! cross-origin policy.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::algorithm::{allclose, run_to_convergence, step};
use crate::distance::assign_labels;
use crate::error::ClusterError;
use crate::generate::{
    generate_dataset, DEFAULT_DIMENSIONS, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_POINTS,
};
use crate::initialization::{initialize_centroids, InitMethod};

/// Initialization method as it appears on the wire. `Manual` is a boundary
/// option: the caller supplies the centroid coordinates and no generation
/// strategy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Random,
    #[serde(rename = "Farthest First")]
    FarthestFirst,
    #[serde(rename = "KMeans++")]
    KMeansPlusPlus,
    Manual,
}

impl Method {
    fn as_init(self) -> Option<InitMethod> {
        match self {
            Method::Random => Some(InitMethod::Random),
            Method::FarthestFirst => Some(InitMethod::FarthestFirst),
            Method::KMeansPlusPlus => Some(InitMethod::KMeansPlusPlus),
            Method::Manual => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeRequest {
    pub method: Method,
    pub data: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroids: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_centroids: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializeResponse {
    pub centroids: Vec<Vec<f64>>,
    pub labels: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRequest {
    pub data: Vec<Vec<f64>>,
    pub centroids: Vec<Vec<f64>>,
    pub labels: Vec<usize>,
}

/// Response shared by the stepping operations. A converged single step
/// carries no payload, so both fields stay absent from the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroids: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<usize>>,
    pub converged: bool,
}

/// Demo dataset with the default shape (100 points in [-10, 10)^2).
pub fn generate<R: Rng>(rng: &mut R) -> Vec<Vec<f64>> {
    generate_dataset(rng, DEFAULT_POINTS, DEFAULT_DIMENSIONS, DEFAULT_LOW, DEFAULT_HIGH)
}

/// Produces the initial matched centroid/label pair.
pub fn initialize<R: Rng>(
    req: &InitializeRequest,
    rng: &mut R,
) -> Result<InitializeResponse, ClusterError> {
    let (centroids, labels) = match req.method.as_init() {
        None => {
            // Manual: caller-supplied coordinates pass straight through,
            // only the labels are computed here
            let centroids = req
                .centroids
                .clone()
                .ok_or(ClusterError::EmptyCentroidSet)?;
            let labels = assign_labels(&req.data, &centroids)?;
            (centroids, labels)
        }
        Some(method) => {
            let k = req
                .number_of_centroids
                .ok_or_else(|| ClusterError::invalid_k(0, req.data.len()))?;
            initialize_centroids(method, k, &req.data, rng)?
        }
    };

    Ok(InitializeResponse { centroids, labels })
}

/// One Lloyd iteration; reports convergence instead of a payload when the
/// recomputed centroids are already close to the input ones.
pub fn single_step(req: &StepRequest) -> Result<StepResponse, ClusterError> {
    let (new_centroids, new_labels) = step(&req.data, &req.centroids, &req.labels)?;

    if allclose(&req.centroids, &new_centroids) {
        return Ok(StepResponse {
            centroids: None,
            labels: None,
            converged: true,
        });
    }

    Ok(StepResponse {
        centroids: Some(new_centroids),
        labels: Some(new_labels),
        converged: false,
    })
}

/// Runs straight to the fixed point and returns the final pair.
pub fn jump_to_convergence(req: &StepRequest) -> Result<StepResponse, ClusterError> {
    let (centroids, labels) = run_to_convergence(&req.data, &req.centroids, &req.labels)?;
    Ok(StepResponse {
        centroids: Some(centroids),
        labels: Some(labels),
        converged: true,
    })
}
