#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident, coordinate, and risk zone types.
//!
//! These are the shared data types for the whole safety-map system: the
//! generator produces [`Incident`]s, the clustering engine turns them into
//! [`RiskZone`]s, and the server and CLI serialize both for display.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Number of hours in a day. Incident hours are always `0..HOURS_PER_DAY`.
pub const HOURS_PER_DAY: u8 = 24;

/// A point in the normalized map plane.
///
/// Both axes conventionally span `[0, 100]` (percent of the map width and
/// height) but the range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A single synthetic incident.
///
/// Created once by the generator and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Unique, densely assigned identifier.
    pub id: u64,
    /// Where the incident happened.
    pub location: Coordinate,
    /// Hour of day the incident happened (0-23).
    pub hour: u8,
}

/// Discrete risk classification of a zone.
///
/// Levels are relative to the busiest zone of the same query, not an
/// absolute scale: the largest cluster for a given hour is always
/// [`RiskLevel::High`], whether it holds 5 incidents or 80.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RiskLevel {
    /// Fewer than a third of the busiest zone's incidents.
    Low,
    /// Between a third and two thirds of the busiest zone's incidents.
    Medium,
    /// At least two thirds of the busiest zone's incidents.
    High,
}

impl RiskLevel {
    /// Legend label for this level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk Zone",
            Self::Medium => "Medium Risk Zone",
            Self::High => "High Risk Zone",
        }
    }

    /// Display color for zone markers at this level, as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#22c55e",
            Self::Medium => "#eab308",
            Self::High => "#ef4444",
        }
    }

    /// Returns all variants in legend order (most severe first).
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

/// A classified spatial cluster of incidents for one queried hour.
///
/// Zones are recomputed on every query; `id` is derived from the cluster
/// index within that single query and is not stable across queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskZone {
    /// `zone-<index>` where index is the cluster's centroid index.
    pub id: String,
    /// Final centroid of the cluster.
    pub center: Coordinate,
    /// Marker radius in visualization units.
    pub radius: f64,
    /// Risk classification relative to the busiest zone.
    pub level: RiskLevel,
    /// Number of incidents in the cluster. Always greater than zero.
    pub incident_count: usize,
}

/// Error returned when an hour of day is outside `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid hour {hour}: expected 0-23")]
pub struct InvalidHourError {
    /// The rejected hour value.
    pub hour: u8,
}

/// Checks that `hour` is a valid hour of day.
///
/// # Errors
///
/// Returns [`InvalidHourError`] if `hour` is 24 or greater.
pub const fn validate_hour(hour: u8) -> Result<u8, InvalidHourError> {
    if hour < HOURS_PER_DAY {
        Ok(hour)
    } else {
        Err(InvalidHourError { hour })
    }
}

/// Formats an hour of day as a 12-hour clock label, e.g. `"06:00 PM"`.
///
/// Hours wrap modulo 24, so `24` formats the same as `0`.
#[must_use]
pub fn format_hour(hour: u8) -> String {
    let hour = hour % HOURS_PER_DAY;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display:02}:00 {suffix}")
}
