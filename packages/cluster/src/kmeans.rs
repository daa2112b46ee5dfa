//! Lloyd's K-Means over 2D coordinates.
//!
//! Centroids are seeded from distinct input points, then refined by
//! alternating nearest-centroid assignment and mean updates until no point
//! changes cluster or [`MAX_ITERATIONS`] is reached.

use std::collections::BTreeSet;

use rand::Rng;
use safety_map_incident_models::Coordinate;

/// Upper bound on assignment/update rounds per clustering call.
pub const MAX_ITERATIONS: usize = 20;

/// Outcome of [`refine`].
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    /// Final centroid per cluster index. Always `k` long.
    pub centroids: Vec<Coordinate>,
    /// Cluster index per input point, in input order.
    pub assignments: Vec<usize>,
    /// Number of assignment rounds performed.
    pub iterations: usize,
    /// Whether the last round changed no assignment.
    pub converged: bool,
}

impl Refinement {
    /// Number of points assigned to each cluster index.
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.centroids.len()];
        for &cluster in &self.assignments {
            sizes[cluster] += 1;
        }
        sizes
    }
}

/// Picks up to `k` initial centroids from distinct points, chosen uniformly
/// at random.
///
/// Draws random indices and skips ones already taken until `k` are chosen
/// or every point has been used.
pub fn init_centroids<R: Rng + ?Sized>(
    rng: &mut R,
    points: &[Coordinate],
    k: usize,
) -> Vec<Coordinate> {
    let target = k.min(points.len());
    let mut taken = BTreeSet::new();
    let mut centroids = Vec::with_capacity(target);

    while centroids.len() < target {
        let index = rng.gen_range(0..points.len());
        if taken.insert(index) {
            centroids.push(points[index]);
        }
    }

    centroids
}

/// Index of the centroid nearest to `point`.
///
/// Ties go to the lowest index.
#[must_use]
pub fn nearest_centroid(point: &Coordinate, centroids: &[Coordinate]) -> usize {
    let mut min_distance = f64::INFINITY;
    let mut closest = 0;

    for (index, centroid) in centroids.iter().enumerate() {
        let distance = point.distance(centroid);
        if distance < min_distance {
            min_distance = distance;
            closest = index;
        }
    }

    closest
}

/// Runs Lloyd's iterations from `centroids` over `points`.
///
/// Every point starts assigned to cluster 0. A cluster left without points
/// keeps its previous centroid.
#[must_use]
pub fn refine(
    points: &[Coordinate],
    mut centroids: Vec<Coordinate>,
    max_iterations: usize,
) -> Refinement {
    let mut assignments = vec![0; points.len()];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;

        let changed = assign(points, &centroids, &mut assignments);
        update_centroids(points, &assignments, &mut centroids);
        log::trace!("K-Means round {iterations}: changed={changed}");

        if !changed {
            converged = true;
            break;
        }
    }

    Refinement {
        centroids,
        assignments,
        iterations,
        converged,
    }
}

/// Reassigns every point to its nearest centroid. Returns whether any
/// assignment changed.
fn assign(points: &[Coordinate], centroids: &[Coordinate], assignments: &mut [usize]) -> bool {
    let mut changed = false;

    for (point, assignment) in points.iter().zip(assignments.iter_mut()) {
        let closest = nearest_centroid(point, centroids);
        if *assignment != closest {
            changed = true;
            *assignment = closest;
        }
    }

    changed
}

/// Moves each centroid to the mean of its assigned points.
fn update_centroids(points: &[Coordinate], assignments: &[usize], centroids: &mut [Coordinate]) {
    let mut sums = vec![Coordinate::default(); centroids.len()];
    let mut counts = vec![0_usize; centroids.len()];

    for (point, &cluster) in points.iter().zip(assignments) {
        sums[cluster].x += point.x;
        sums[cluster].y += point.y;
        counts[cluster] += 1;
    }

    for ((centroid, sum), count) in centroids.iter_mut().zip(sums).zip(counts) {
        if count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let n = count as f64;
            *centroid = Coordinate::new(sum.x / n, sum.y / n);
        }
    }
}
