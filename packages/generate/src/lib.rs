#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Synthetic incident dataset generator.
//!
//! Draws incidents from the built-in [`patterns`]: three overlapping
//! hotspots with their own hours of activity plus a layer of background
//! noise spread across the whole map and day. Ids are assigned densely from
//! zero in generation order.
//!
//! The dataset is generated once and treated as immutable by everything
//! downstream. [`export`] writes it to disk as JSON or `GeoJSONSeq`.

pub mod export;
pub mod interactive;
pub mod patterns;

use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng as _};
use rand_chacha::ChaCha8Rng;
use safety_map_incident_models::Incident;

use crate::patterns::{IncidentPattern, all_patterns};

/// Size of the dataset produced by the built-in patterns.
pub const EXPECTED_INCIDENT_COUNT: usize = 700;

/// Returns the directory generated datasets are written to.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`, so output always
/// lands under the project root regardless of the caller's working
/// directory.
///
/// # Panics
///
/// Panics if the project root cannot be resolved from `CARGO_MANIFEST_DIR`.
#[must_use]
pub fn output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("Failed to find project root from CARGO_MANIFEST_DIR")
        .join("data/generated")
}

/// Generates the built-in dataset using the thread-local RNG.
#[must_use]
pub fn generate_incidents() -> Vec<Incident> {
    generate_incidents_with(&mut rand::thread_rng())
}

/// Generates the built-in dataset from a fixed seed.
#[must_use]
pub fn generate_seeded(seed: u64) -> Vec<Incident> {
    generate_incidents_with(&mut ChaCha8Rng::seed_from_u64(seed))
}

/// Generates the built-in dataset, drawing from `rng`.
pub fn generate_incidents_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<Incident> {
    generate_from_patterns(rng, &all_patterns())
}

/// Generates `pattern.count` incidents for each pattern in order and
/// concatenates them, numbering ids from zero.
pub fn generate_from_patterns<R: Rng + ?Sized>(
    rng: &mut R,
    patterns: &[IncidentPattern],
) -> Vec<Incident> {
    let total = patterns.iter().map(|p| p.count).sum();
    let mut incidents = Vec::with_capacity(total);
    let mut next_id = 0_u64;

    for pattern in patterns {
        for _ in 0..pattern.count {
            incidents.push(pattern.sample(rng, next_id));
            next_id += 1;
        }
        log::debug!("Generated {} incidents for {}", pattern.count, pattern.id);
    }

    log::info!(
        "Generated {} incidents from {} patterns",
        incidents.len(),
        patterns.len()
    );

    incidents
}

#[cfg(test)]
mod tests {
    use super::*;
    use safety_map_incident_models::HOURS_PER_DAY;

    #[test]
    fn generates_expected_count() {
        assert_eq!(generate_incidents().len(), EXPECTED_INCIDENT_COUNT);
    }

    #[test]
    fn ids_are_dense_and_ordered() {
        let incidents = generate_seeded(1);
        for (i, incident) in incidents.iter().enumerate() {
            assert_eq!(incident.id, i as u64);
        }
    }

    #[test]
    fn hours_are_valid() {
        for incident in generate_seeded(2) {
            assert!(incident.hour < HOURS_PER_DAY);
        }
    }

    #[test]
    fn incidents_follow_pattern_order() {
        let incidents = generate_seeded(3);
        let mut offset = 0;
        for pattern in all_patterns() {
            for incident in &incidents[offset..offset + pattern.count] {
                assert!(pattern.hours.contains(incident.hour));
                assert!(incident.location.x >= pattern.x.min);
                assert!(incident.location.x < pattern.x.max);
            }
            offset += pattern.count;
        }
        assert_eq!(offset, EXPECTED_INCIDENT_COUNT);
    }

    #[test]
    fn seed_pins_the_dataset() {
        assert_eq!(generate_seeded(42), generate_seeded(42));
        assert_ne!(generate_seeded(42), generate_seeded(43));
    }

    #[test]
    fn late_evening_hotspot_only_uses_its_hours() {
        let incidents = generate_seeded(4);
        for incident in &incidents[..150] {
            assert!((18..=22).contains(&incident.hour));
        }
    }
}
