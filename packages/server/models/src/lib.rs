#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the safety map server.
//!
//! These types are serialized to JSON for the REST API. Zones and incidents
//! are passed through in their model form; the wrappers here add the query
//! context a map frontend needs to render them.

use safety_map_incident_models::{RiskLevel, RiskZone};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
    /// Number of incidents loaded at startup.
    pub incident_count: usize,
}

/// Query parameters for the zones endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneQueryParams {
    /// Hour of day to cluster (0-23). Defaults to the server's default hour.
    pub hour: Option<u8>,
    /// Number of clusters (overrides server default).
    pub k: Option<usize>,
}

/// Response from the zones endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiZones {
    /// Hour of day the zones were computed for.
    pub hour: u8,
    /// 12-hour clock label for `hour` (e.g. `"06:00 PM"`).
    pub hour_label: String,
    /// Requested number of clusters.
    pub k: usize,
    /// Classified zones in cluster index order.
    pub zones: Vec<RiskZone>,
}

/// Query parameters for the incidents endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentQueryParams {
    /// Only return incidents within the clustering window of this hour.
    pub hour: Option<u8>,
}

/// One row of the risk level legend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLegendEntry {
    /// Risk level.
    pub level: RiskLevel,
    /// Display label.
    pub label: String,
    /// Marker color as a CSS hex string.
    pub color: String,
}

impl From<RiskLevel> for ApiLegendEntry {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            color: level.color().to_string(),
        }
    }
}

/// Error body returned with 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}
