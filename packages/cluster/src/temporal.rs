//! Time-of-day filtering with midnight wraparound.

use safety_map_incident_models::{HOURS_PER_DAY, Incident};

/// Incidents up to this many hours from the query hour (in either
/// direction) take part in clustering.
pub const HOUR_WINDOW: u8 = 2;

/// Distance between two hours of day on a 24-hour clock.
///
/// Wraps around midnight, so `circular_hour_distance(23, 1) == 2`.
#[must_use]
pub const fn circular_hour_distance(a: u8, b: u8) -> u8 {
    let d = a.abs_diff(b) % HOURS_PER_DAY;
    let wrapped = HOURS_PER_DAY - d;
    if d < wrapped { d } else { wrapped }
}

/// Returns the incidents within [`HOUR_WINDOW`] hours of `hour`, in input
/// order.
#[must_use]
pub fn filter_by_hour(incidents: &[Incident], hour: u8) -> Vec<&Incident> {
    incidents
        .iter()
        .filter(|incident| circular_hour_distance(incident.hour, hour) <= HOUR_WINDOW)
        .collect()
}
