//! Turns refined clusters into classified [`RiskZone`]s.

use safety_map_incident_models::{RiskLevel, RiskZone};

use crate::kmeans::Refinement;

/// Share of the busiest cluster's size at or above which a cluster is
/// [`RiskLevel::High`].
pub const HIGH_RISK_RATIO: f64 = 0.66;

/// Share of the busiest cluster's size at or above which a cluster is
/// [`RiskLevel::Medium`].
pub const MEDIUM_RISK_RATIO: f64 = 0.33;

/// Radius of a zone before accounting for its incidents.
pub const BASE_RADIUS: f64 = 20.0;

/// Radius added per incident in a zone.
pub const RADIUS_PER_INCIDENT: f64 = 1.5;

/// Classifies a cluster of `count` incidents against the busiest cluster's
/// `max_count`. Both thresholds are inclusive.
#[must_use]
pub fn classify(count: usize, max_count: usize) -> RiskLevel {
    #[allow(clippy::cast_precision_loss)]
    let (count, max_count) = (count as f64, max_count as f64);

    if count >= max_count * HIGH_RISK_RATIO {
        RiskLevel::High
    } else if count >= max_count * MEDIUM_RISK_RATIO {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Marker radius for a zone holding `count` incidents.
#[must_use]
pub fn zone_radius(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let count = count as f64;
    BASE_RADIUS + count * RADIUS_PER_INCIDENT
}

/// Builds one zone per non-empty cluster, in ascending cluster index order.
///
/// Returns an empty list if every cluster is empty.
#[must_use]
pub fn materialize(refinement: &Refinement) -> Vec<RiskZone> {
    let sizes = refinement.cluster_sizes();
    let Some(max_count) = sizes.iter().copied().filter(|&c| c > 0).max() else {
        return Vec::new();
    };

    sizes
        .into_iter()
        .zip(&refinement.centroids)
        .enumerate()
        .filter(|(_, (count, _))| *count > 0)
        .map(|(index, (count, center))| RiskZone {
            id: format!("zone-{index}"),
            center: *center,
            radius: zone_radius(count),
            level: classify(count, max_count),
            incident_count: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use safety_map_incident_models::Coordinate;

    #[test]
    fn busiest_cluster_is_always_high() {
        for max in 1..200 {
            assert_eq!(classify(max, max), RiskLevel::High);
        }
    }

    #[test]
    fn thresholds_are_relative_to_max() {
        // max 10: high >= 6.6, medium >= 3.3
        assert_eq!(classify(7, 10), RiskLevel::High);
        assert_eq!(classify(6, 10), RiskLevel::Medium);
        assert_eq!(classify(4, 10), RiskLevel::Medium);
        assert_eq!(classify(3, 10), RiskLevel::Low);
        assert_eq!(classify(1, 10), RiskLevel::Low);
    }

    #[test]
    fn thresholds_are_inclusive() {
        // max 50: high >= 33.0, medium >= 16.5
        assert_eq!(classify(33, 50), RiskLevel::High);
        assert_eq!(classify(32, 50), RiskLevel::Medium);
        assert_eq!(classify(17, 50), RiskLevel::Medium);
        assert_eq!(classify(16, 50), RiskLevel::Low);

        // max 100: medium threshold lands exactly on 33
        assert_eq!(classify(33, 100), RiskLevel::Medium);
        assert_eq!(classify(32, 100), RiskLevel::Low);
        assert_eq!(classify(66, 100), RiskLevel::High);
        assert_eq!(classify(65, 100), RiskLevel::Medium);

        // max 3: high >= 1.98, medium >= 0.99
        assert_eq!(classify(2, 3), RiskLevel::High);
        assert_eq!(classify(1, 3), RiskLevel::Medium);
    }

    #[test]
    fn radius_grows_linearly() {
        assert!((zone_radius(0) - 20.0).abs() < f64::EPSILON);
        assert!((zone_radius(3) - 24.5).abs() < f64::EPSILON);
        assert!((zone_radius(80) - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drops_empty_clusters_and_keeps_index_ids() {
        let refinement = Refinement {
            centroids: vec![
                Coordinate::new(1.0, 1.0),
                Coordinate::new(50.0, 50.0),
                Coordinate::new(90.0, 90.0),
            ],
            assignments: vec![0, 2, 2, 0, 2, 2, 2, 2],
            iterations: 2,
            converged: true,
        };

        let zones = materialize(&refinement);

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, "zone-0");
        assert_eq!(zones[0].incident_count, 2);
        assert_eq!(zones[0].level, RiskLevel::Medium);
        assert_eq!(zones[0].center, Coordinate::new(1.0, 1.0));
        assert_eq!(zones[1].id, "zone-2");
        assert_eq!(zones[1].incident_count, 6);
        assert_eq!(zones[1].level, RiskLevel::High);
        assert!((zones[1].radius - 29.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_assignments_yields_no_zones() {
        let refinement = Refinement {
            centroids: vec![Coordinate::new(1.0, 1.0)],
            assignments: Vec::new(),
            iterations: 1,
            converged: true,
        };
        assert!(materialize(&refinement).is_empty());
    }
}
