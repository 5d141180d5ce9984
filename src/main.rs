use rand::rngs::StdRng;
use rand::SeedableRng;

use kmeans_incremental::algorithm::run_to_convergence;
use kmeans_incremental::api;
use kmeans_incremental::inertia::calculate_inertia;
use kmeans_incremental::initialization::{initialize_centroids, InitMethod};
use kmeans_incremental::logger::init_logger;

fn main() {
    init_logger().expect("Failed to initialize logger");

    let mut rng = StdRng::from_entropy();
    let data = api::generate(&mut rng);
    log::info!("Generated demo dataset with {} points", data.len());

    let k = 4;
    for method in [
        InitMethod::Random,
        InitMethod::FarthestFirst,
        InitMethod::KMeansPlusPlus,
    ] {
        log::info!("Starting KMeans with {:?} initialization", method);
        let (centroids, labels) =
            initialize_centroids(method, k, &data, &mut rng).expect("error during initialization");
        let initial_inertia = calculate_inertia(&data, &centroids, &labels);

        let (centroids, labels) =
            run_to_convergence(&data, &centroids, &labels).expect("error during kmeans");
        let final_inertia = calculate_inertia(&data, &centroids, &labels);

        log::info!(
            "Finished KMeans with {:?} - Inertia: {:.3} -> {:.3}",
            method,
            initial_inertia,
            final_inertia
        );
    }
}
