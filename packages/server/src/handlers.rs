//! HTTP handler functions for the safety map API.

use actix_web::{HttpResponse, web};
use safety_map_cluster::{cluster_incidents, filter_by_hour};
use safety_map_generate::patterns::all_patterns;
use safety_map_incident_models::{Incident, RiskLevel, format_hour, validate_hour};
use safety_map_server_models::{
    ApiError, ApiHealth, ApiLegendEntry, ApiZones, IncidentQueryParams, ZoneQueryParams,
};

use crate::AppState;

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError { error: message })
}

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        incident_count: state.incidents.len(),
    })
}

/// `GET /api/incidents`
///
/// Returns the full dataset, or only the incidents that would take part in
/// clustering for `hour` when given.
pub async fn incidents(
    state: web::Data<AppState>,
    params: web::Query<IncidentQueryParams>,
) -> HttpResponse {
    let Some(hour) = params.hour else {
        return HttpResponse::Ok().json(&state.incidents);
    };

    match validate_hour(hour) {
        Ok(hour) => {
            let filtered: Vec<Incident> = filter_by_hour(&state.incidents, hour)
                .into_iter()
                .copied()
                .collect();
            HttpResponse::Ok().json(filtered)
        }
        Err(e) => {
            log::warn!("Rejected incidents query: {e}");
            bad_request(e.to_string())
        }
    }
}

/// `GET /api/zones`
///
/// Clusters the dataset for one hour of day and returns the classified
/// risk zones.
pub async fn zones(
    state: web::Data<AppState>,
    params: web::Query<ZoneQueryParams>,
) -> HttpResponse {
    let hour = params.hour.unwrap_or(state.config.default_hour);
    let k = params.k.unwrap_or(state.config.default_k);

    match cluster_incidents(&state.incidents, hour, k) {
        Ok(zones) => HttpResponse::Ok().json(ApiZones {
            hour,
            hour_label: format_hour(hour),
            k,
            zones,
        }),
        Err(e) => {
            log::warn!("Rejected zones query (hour={hour}, k={k}): {e}");
            bad_request(e.to_string())
        }
    }
}

/// `GET /api/legend`
pub async fn legend() -> HttpResponse {
    let entries: Vec<ApiLegendEntry> = RiskLevel::all()
        .iter()
        .copied()
        .map(ApiLegendEntry::from)
        .collect();
    HttpResponse::Ok().json(entries)
}

/// `GET /api/patterns`
///
/// Lists the incident patterns the dataset was generated from.
pub async fn patterns() -> HttpResponse {
    HttpResponse::Ok().json(all_patterns())
}
