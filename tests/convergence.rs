use rand::rngs::StdRng;
use rand::SeedableRng;

use kmeans_incremental::api::{
    initialize, jump_to_convergence, single_step, InitializeRequest, Method, StepRequest,
};
use kmeans_incremental::inertia::calculate_inertia;

fn run_pipeline(method: Method, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = kmeans_incremental::api::generate(&mut rng);

    let init = initialize(
        &InitializeRequest {
            method,
            data: data.clone(),
            centroids: None,
            number_of_centroids: Some(4),
        },
        &mut rng,
    )
    .unwrap();
    assert_eq!(init.centroids.len(), 4);
    assert_eq!(init.labels.len(), data.len());
    assert!(init.labels.iter().all(|&label| label < 4));
    let initial_inertia = calculate_inertia(&data, &init.centroids, &init.labels);

    let finished = jump_to_convergence(&StepRequest {
        data: data.clone(),
        centroids: init.centroids,
        labels: init.labels,
    })
    .unwrap();
    assert!(finished.converged);

    let centroids = finished.centroids.unwrap();
    let labels = finished.labels.unwrap();
    assert_eq!(centroids.len(), 4);
    assert_eq!(labels.len(), data.len());
    assert!(calculate_inertia(&data, &centroids, &labels) <= initial_inertia + 1e-9);

    // A converged pair must report converged again immediately
    let repeat = single_step(&StepRequest {
        data,
        centroids,
        labels,
    })
    .unwrap();
    assert!(repeat.converged);
    assert_eq!(repeat.centroids, None);
    assert_eq!(repeat.labels, None);
}

#[test]
fn random_initialization_runs_to_a_stable_fixed_point() {
    run_pipeline(Method::Random, 17);
}

#[test]
fn farthest_first_initialization_runs_to_a_stable_fixed_point() {
    run_pipeline(Method::FarthestFirst, 17);
}

#[test]
fn kmeans_plusplus_initialization_runs_to_a_stable_fixed_point() {
    run_pipeline(Method::KMeansPlusPlus, 17);
}

#[test]
fn stepping_manually_reaches_the_same_fixed_point_as_jumping() {
    let mut rng = StdRng::seed_from_u64(23);
    let data = kmeans_incremental::api::generate(&mut rng);

    let init = initialize(
        &InitializeRequest {
            method: Method::Random,
            data: data.clone(),
            centroids: None,
            number_of_centroids: Some(3),
        },
        &mut rng,
    )
    .unwrap();

    let jumped = jump_to_convergence(&StepRequest {
        data: data.clone(),
        centroids: init.centroids.clone(),
        labels: init.labels.clone(),
    })
    .unwrap();

    // Repeat single steps by hand; the driver must follow the exact same
    // deterministic trajectory
    let mut centroids = init.centroids;
    let mut labels = init.labels;
    for _ in 0..kmeans_incremental::algorithm::MAX_ITERATIONS {
        let (new_centroids, new_labels) =
            kmeans_incremental::algorithm::step(&data, &centroids, &labels).unwrap();
        let converged = kmeans_incremental::algorithm::allclose(&centroids, &new_centroids);
        centroids = new_centroids;
        labels = new_labels;
        if converged {
            break;
        }
    }

    assert_eq!(Some(centroids), jumped.centroids);
    assert_eq!(Some(labels), jumped.labels);
}
