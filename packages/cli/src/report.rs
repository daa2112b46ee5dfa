//! Plain-text rendering of zones and hour sweeps.

use std::fmt::Write as _;

use safety_map_incident_models::{RiskLevel, RiskZone, format_hour};

/// Summary of one hour in a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSummary {
    /// Hour of day.
    pub hour: u8,
    /// Number of zones found.
    pub zone_count: usize,
    /// Number of [`RiskLevel::High`] zones.
    pub high_count: usize,
    /// Size of the busiest zone, or 0 if there were none.
    pub busiest: usize,
    /// Total incidents across all zones.
    pub total_incidents: usize,
}

impl HourSummary {
    /// Summarizes the zones computed for `hour`.
    #[must_use]
    pub fn new(hour: u8, zones: &[RiskZone]) -> Self {
        Self {
            hour,
            zone_count: zones.len(),
            high_count: zones.iter().filter(|z| z.level == RiskLevel::High).count(),
            busiest: zones.iter().map(|z| z.incident_count).max().unwrap_or(0),
            total_incidents: zones.iter().map(|z| z.incident_count).sum(),
        }
    }
}

/// Renders one line per zone for `hour`.
#[must_use]
pub fn format_zones(hour: u8, zones: &[RiskZone]) -> String {
    let mut out = format!("Risk zones at {}\n", format_hour(hour));

    if zones.is_empty() {
        out.push_str("  (no zones: not enough incidents near this hour)\n");
        return out;
    }

    for zone in zones {
        let _ = writeln!(
            out,
            "  {:<8} {:<6} center ({:>5.1}, {:>5.1})  radius {:>6.1}  {:>4} incidents",
            zone.id,
            zone.level,
            zone.center.x,
            zone.center.y,
            zone.radius,
            zone.incident_count,
        );
    }
    out
}

/// Renders a 24-hour sweep table.
#[must_use]
pub fn format_sweep(summaries: &[HourSummary]) -> String {
    let mut out = String::from("Hour      Zones  High  Busiest  Incidents\n");
    for s in summaries {
        let _ = writeln!(
            out,
            "{:<9} {:>5} {:>5} {:>8} {:>10}",
            format_hour(s.hour),
            s.zone_count,
            s.high_count,
            s.busiest,
            s.total_incidents,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use safety_map_incident_models::Coordinate;

    use super::*;

    fn zone(index: usize, level: RiskLevel, count: usize) -> RiskZone {
        RiskZone {
            id: format!("zone-{index}"),
            center: Coordinate::new(10.0, 20.0),
            radius: 20.0,
            level,
            incident_count: count,
        }
    }

    #[test]
    fn summarizes_zones() {
        let zones = [
            zone(0, RiskLevel::High, 40),
            zone(1, RiskLevel::Low, 5),
            zone(3, RiskLevel::High, 30),
        ];
        let summary = HourSummary::new(21, &zones);
        assert_eq!(
            summary,
            HourSummary {
                hour: 21,
                zone_count: 3,
                high_count: 2,
                busiest: 40,
                total_incidents: 75,
            }
        );
    }

    #[test]
    fn empty_hour_summary() {
        let summary = HourSummary::new(9, &[]);
        assert_eq!(summary.zone_count, 0);
        assert_eq!(summary.busiest, 0);
    }

    #[test]
    fn formats_zone_lines() {
        let text = format_zones(18, &[zone(2, RiskLevel::Medium, 12)]);
        assert!(text.starts_with("Risk zones at 06:00 PM"));
        assert!(text.contains("zone-2"));
        assert!(text.contains("Medium"));
        assert!(text.contains("12 incidents"));
    }

    #[test]
    fn formats_empty_zone_list() {
        let text = format_zones(4, &[]);
        assert!(text.contains("no zones"));
    }

    #[test]
    fn sweep_has_header_and_one_row_per_hour() {
        let summaries: Vec<HourSummary> = (0..24).map(|h| HourSummary::new(h, &[])).collect();
        let text = format_sweep(&summaries);
        assert_eq!(text.lines().count(), 25);
        assert!(text.lines().nth(1).unwrap().starts_with("12:00 AM"));
    }
}
