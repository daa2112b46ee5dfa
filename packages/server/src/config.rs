//! Server configuration from environment variables.

use safety_map_incident_models::validate_hour;

/// Number of zones computed when a request does not specify `k`.
pub const DEFAULT_ZONE_COUNT: usize = 5;

/// Hour of day used when a request does not specify one (6 PM).
pub const DEFAULT_HOUR: u8 = 18;

/// Runtime settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`, default `127.0.0.1`).
    pub bind_addr: String,
    /// Port to listen on (`PORT`, default `8080`).
    pub port: u16,
    /// Seed for the generated dataset (`SAFETY_MAP_SEED`, random if unset).
    pub seed: Option<u64>,
    /// Default cluster count (`SAFETY_MAP_ZONES`).
    pub default_k: usize,
    /// Default query hour (`SAFETY_MAP_HOUR`).
    pub default_hour: u8,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            seed: None,
            default_k: DEFAULT_ZONE_COUNT,
            default_hour: DEFAULT_HOUR,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset or unparseable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_k = match lookup("SAFETY_MAP_ZONES").and_then(|v| v.parse().ok()) {
            Some(0) => {
                log::warn!("SAFETY_MAP_ZONES must be at least 1, using {DEFAULT_ZONE_COUNT}");
                DEFAULT_ZONE_COUNT
            }
            Some(k) => k,
            None => defaults.default_k,
        };

        let default_hour = match lookup("SAFETY_MAP_HOUR").and_then(|v| v.parse().ok()) {
            Some(hour) => validate_hour(hour).unwrap_or_else(|e| {
                log::warn!("SAFETY_MAP_HOUR: {e}, using {DEFAULT_HOUR}");
                DEFAULT_HOUR
            }),
            None => defaults.default_hour,
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            seed: lookup("SAFETY_MAP_SEED").and_then(|s| s.parse().ok()),
            default_k,
            default_hour,
        }
    }
}
