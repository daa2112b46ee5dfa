#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Temporal clustering engine.
//!
//! Given the full incident set, a query hour, and a cluster count `k`, keeps
//! the incidents within two hours of the query (wrapping around midnight),
//! groups their locations with Lloyd's K-Means, and classifies the resulting
//! clusters into [`RiskZone`]s relative to the busiest one.
//!
//! Every call is a pure recomputation over an immutable incident slice.
//! The only non-determinism is centroid seeding, which draws from an
//! injectable [`rand::Rng`]; [`cluster_seeded`] pins it for reproducible
//! output.

pub mod kmeans;
pub mod temporal;
pub mod zones;

use rand::{Rng, SeedableRng as _};
use rand_chacha::ChaCha8Rng;
use safety_map_incident_models::{Coordinate, Incident, InvalidHourError, RiskZone, validate_hour};

pub use kmeans::MAX_ITERATIONS;
pub use temporal::{HOUR_WINDOW, circular_hour_distance, filter_by_hour};

/// Errors returned for queries that cannot be answered.
///
/// Degenerate data (no incidents, fewer survivors than `k`) is not an
/// error; it produces an empty zone list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClusterError {
    /// The query hour is outside `0..=23`.
    #[error(transparent)]
    InvalidHour(#[from] InvalidHourError),

    /// A cluster count of zero was requested.
    #[error("cluster count must be at least 1")]
    ZeroClusters,
}

/// Clusters the incidents relevant to `hour` into at most `k` risk zones,
/// seeding centroids from the thread-local RNG.
///
/// # Errors
///
/// Returns [`ClusterError`] if `hour` is not a valid hour of day or `k` is
/// zero.
pub fn cluster_incidents(
    incidents: &[Incident],
    hour: u8,
    k: usize,
) -> Result<Vec<RiskZone>, ClusterError> {
    cluster_incidents_with(&mut rand::thread_rng(), incidents, hour, k)
}

/// Same as [`cluster_incidents`] with a deterministic seed.
///
/// # Errors
///
/// Returns [`ClusterError`] if `hour` is not a valid hour of day or `k` is
/// zero.
pub fn cluster_seeded(
    seed: u64,
    incidents: &[Incident],
    hour: u8,
    k: usize,
) -> Result<Vec<RiskZone>, ClusterError> {
    cluster_incidents_with(&mut ChaCha8Rng::seed_from_u64(seed), incidents, hour, k)
}

/// Clusters the incidents relevant to `hour` into at most `k` risk zones,
/// drawing initial centroids from `rng`.
///
/// Returns an empty list when there are no incidents, when fewer than `k`
/// incidents fall inside the hour window, or when no cluster ends up with
/// members.
///
/// # Errors
///
/// Returns [`ClusterError`] if `hour` is not a valid hour of day or `k` is
/// zero. Both are checked before any data is examined.
pub fn cluster_incidents_with<R: Rng + ?Sized>(
    rng: &mut R,
    incidents: &[Incident],
    hour: u8,
    k: usize,
) -> Result<Vec<RiskZone>, ClusterError> {
    let hour = validate_hour(hour)?;
    if k == 0 {
        return Err(ClusterError::ZeroClusters);
    }

    if incidents.is_empty() {
        return Ok(Vec::new());
    }

    let relevant = filter_by_hour(incidents, hour);
    log::debug!(
        "{} of {} incidents within {HOUR_WINDOW}h of hour {hour}",
        relevant.len(),
        incidents.len()
    );

    if relevant.len() < k {
        log::debug!(
            "Not enough incidents ({}) for {k} clusters at hour {hour}",
            relevant.len()
        );
        return Ok(Vec::new());
    }

    let points: Vec<Coordinate> = relevant.iter().map(|i| i.location).collect();
    let centroids = kmeans::init_centroids(rng, &points, k);
    let refinement = kmeans::refine(&points, centroids, MAX_ITERATIONS);

    log::debug!(
        "K-Means at hour {hour}: {} iteration(s), converged={}",
        refinement.iterations,
        refinement.converged
    );

    Ok(zones::materialize(&refinement))
}
