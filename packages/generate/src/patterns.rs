//! Incident pattern definitions.
//!
//! Each `.toml` file in `packages/generate/patterns/` describes one spatial
//! and temporal hotspot: a rectangular area, a window of hours, and how many
//! incidents to draw from it. The files are baked into the binary at compile
//! time via [`include_str!`].

use rand::Rng;
use safety_map_incident_models::{Coordinate, HOURS_PER_DAY, Incident};
use serde::{Deserialize, Serialize};

/// Pattern TOMLs embedded at compile time, in generation order.
const PATTERN_TOMLS: &[(&str, &str)] = &[
    (
        "business_district",
        include_str!("../patterns/business_district.toml"),
    ),
    ("residential", include_str!("../patterns/residential.toml")),
    (
        "entertainment_hub",
        include_str!("../patterns/entertainment_hub.toml"),
    ),
    ("background", include_str!("../patterns/background.toml")),
];

/// Errors produced while loading a pattern definition.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The TOML could not be deserialized.
    #[error("Pattern parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The TOML parsed but describes an unusable pattern.
    #[error("Invalid pattern {id}: {message}")]
    Invalid {
        /// Pattern identifier.
        id: String,
        /// Description of what is wrong.
        message: String,
    },
}

/// Half-open interval `[min, max)` along one map axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl AxisRange {
    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..self.max)
    }
}

/// A run of `span` consecutive hours beginning at `start`, wrapping past
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    /// First hour of the window (0-23).
    pub start: u8,
    /// Number of hours covered (1-24).
    pub span: u8,
}

impl HourWindow {
    /// Whether `hour` falls inside this window.
    #[must_use]
    pub const fn contains(self, hour: u8) -> bool {
        let hour = hour % HOURS_PER_DAY;
        let start = self.start % HOURS_PER_DAY;
        (hour + HOURS_PER_DAY - start) % HOURS_PER_DAY < self.span
    }

    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u8 {
        (self.start + rng.gen_range(0..self.span)) % HOURS_PER_DAY
    }
}

/// One hotspot the generator draws incidents from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentPattern {
    /// Unique identifier (e.g., `"business_district"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// What kind of place this is and when it is busy.
    pub description: String,
    /// Number of incidents to generate.
    pub count: usize,
    /// Horizontal extent.
    pub x: AxisRange,
    /// Vertical extent.
    pub y: AxisRange,
    /// Hours incidents may occur in.
    pub hours: HourWindow,
}

impl IncidentPattern {
    /// Draws one incident from this pattern.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, id: u64) -> Incident {
        let x = self.x.sample(rng);
        let y = self.y.sample(rng);
        let hour = self.hours.sample(rng);

        Incident {
            id,
            location: Coordinate::new(x, y),
            hour,
        }
    }

    /// Checks that the pattern can be sampled.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Invalid`] if the count is zero, an axis range
    /// is empty or not finite, or the hour window is out of range.
    pub fn validate(&self) -> Result<(), PatternError> {
        let invalid = |message: &str| {
            Err(PatternError::Invalid {
                id: self.id.clone(),
                message: message.to_string(),
            })
        };

        if self.id.is_empty() {
            return invalid("id is empty");
        }
        if self.count == 0 {
            return invalid("count must be positive");
        }
        for (axis, range) in [("x", self.x), ("y", self.y)] {
            if !range.min.is_finite() || !range.max.is_finite() || range.min >= range.max {
                return invalid(&format!(
                    "{axis} range [{}, {}) is empty or not finite",
                    range.min, range.max
                ));
            }
        }
        if self.hours.start >= HOURS_PER_DAY {
            return invalid("hours.start must be 0-23");
        }
        if self.hours.span == 0 || self.hours.span > HOURS_PER_DAY {
            return invalid("hours.span must be 1-24");
        }

        Ok(())
    }
}

/// Parses and validates a pattern definition.
///
/// # Errors
///
/// Returns [`PatternError`] if the TOML is malformed or describes an
/// invalid pattern.
pub fn parse_pattern_toml(toml_str: &str) -> Result<IncidentPattern, PatternError> {
    let pattern: IncidentPattern = toml::from_str(toml_str)?;
    pattern.validate()?;
    Ok(pattern)
}

/// Returns every built-in pattern, in generation order.
///
/// # Panics
///
/// Panics if any embedded TOML is malformed (the files ship with the
/// binary, so this is caught by the tests below).
#[must_use]
pub fn all_patterns() -> Vec<IncidentPattern> {
    PATTERN_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_pattern_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn loads_all_patterns() {
        let patterns = all_patterns();
        let ids: Vec<&str> = patterns.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "business_district",
                "residential",
                "entertainment_hub",
                "background"
            ]
        );
    }

    #[test]
    fn pattern_file_names_match_ids() {
        for ((name, _), pattern) in PATTERN_TOMLS.iter().zip(all_patterns()) {
            assert_eq!(*name, pattern.id);
        }
    }

    #[test]
    fn built_in_counts() {
        let counts: Vec<usize> = all_patterns().iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![150, 100, 200, 250]);
    }

    #[test]
    fn hour_window_wraps_past_midnight() {
        let window = HourWindow { start: 23, span: 6 };
        for hour in [23, 0, 1, 2, 3, 4] {
            assert!(window.contains(hour), "{hour} should be inside");
        }
        for hour in [5, 12, 22] {
            assert!(!window.contains(hour), "{hour} should be outside");
        }
    }

    #[test]
    fn samples_stay_inside_the_pattern() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for pattern in all_patterns() {
            for id in 0..500 {
                let incident = pattern.sample(&mut rng, id);
                assert_eq!(incident.id, id);
                assert!(incident.location.x >= pattern.x.min);
                assert!(incident.location.x < pattern.x.max);
                assert!(incident.location.y >= pattern.y.min);
                assert!(incident.location.y < pattern.y.max);
                assert!(
                    pattern.hours.contains(incident.hour),
                    "{}: hour {} outside window",
                    pattern.id,
                    incident.hour
                );
            }
        }
    }

    #[test]
    fn rejects_empty_axis_range() {
        let toml = r#"
            id = "bad"
            name = "Bad"
            description = "Zero-width area"
            count = 10
            x = { min = 5.0, max = 5.0 }
            y = { min = 0.0, max = 1.0 }
            hours = { start = 0, span = 1 }
        "#;
        let err = parse_pattern_toml(toml).unwrap_err();
        assert!(matches!(err, PatternError::Invalid { ref id, .. } if id == "bad"));
    }

    #[test]
    fn rejects_out_of_range_hours() {
        let toml = r#"
            id = "late"
            name = "Late"
            description = "Starts at hour 24"
            count = 10
            x = { min = 0.0, max = 1.0 }
            y = { min = 0.0, max = 1.0 }
            hours = { start = 24, span = 1 }
        "#;
        assert!(matches!(
            parse_pattern_toml(toml),
            Err(PatternError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            parse_pattern_toml("id = "),
            Err(PatternError::Parse(_))
        ));
    }
}
