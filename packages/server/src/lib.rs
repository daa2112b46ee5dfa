#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the safety map.
//!
//! Generates the incident dataset once at startup and serves it, together
//! with per-hour risk zones, to a map frontend. Every zones request re-runs
//! clustering from scratch against the shared, read-only dataset.

pub mod config;
mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use safety_map_generate::{generate_incidents, generate_seeded};
use safety_map_incident_models::Incident;

use crate::config::ServerConfig;

/// Shared application state.
pub struct AppState {
    /// The generated dataset. Never mutated after startup.
    pub incidents: Vec<Incident>,
    /// Settings the server was started with.
    pub config: ServerConfig,
}

impl AppState {
    /// Generates the dataset described by `config`.
    #[must_use]
    pub fn generate(config: ServerConfig) -> Self {
        let incidents = config
            .seed
            .map_or_else(generate_incidents, generate_seeded);
        Self { incidents, config }
    }
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/incidents", web::get().to(handlers::incidents))
            .route("/zones", web::get().to(handlers::zones))
            .route("/legend", web::get().to(handlers::legend))
            .route("/patterns", web::get().to(handlers::patterns)),
    );
}

/// Starts the API server with configuration read from the environment.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    run_server_with(ServerConfig::from_env()).await
}

/// Starts the API server with an explicit configuration.
///
/// This is a regular async function; the caller provides the runtime (e.g.
/// via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server_with(config: ServerConfig) -> std::io::Result<()> {
    log::info!("Generating incident dataset...");
    let state = web::Data::new(AppState::generate(config));
    log::info!(
        "Loaded {} incidents (default hour {}, k={})",
        state.incidents.len(),
        state.config.default_hour,
        state.config.default_k
    );

    let bind_addr = state.config.bind_addr.clone();
    let port = state.config.port;
    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use safety_map_generate::EXPECTED_INCIDENT_COUNT;
    use safety_map_incident_models::RiskZone;
    use safety_map_server_models::ApiZones;

    use super::*;

    fn seeded_state() -> web::Data<AppState> {
        web::Data::new(AppState::generate(ServerConfig {
            seed: Some(7),
            ..ServerConfig::default()
        }))
    }

    #[actix_web::test]
    async fn health_reports_dataset_size() {
        let app = test::init_service(App::new().app_data(seeded_state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["healthy"], true);
        assert_eq!(body["incidentCount"], EXPECTED_INCIDENT_COUNT);
    }

    #[actix_web::test]
    async fn zones_use_defaults() {
        let app = test::init_service(App::new().app_data(seeded_state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/zones").to_request();
        let body: ApiZones = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.hour, 18);
        assert_eq!(body.hour_label, "06:00 PM");
        assert_eq!(body.k, 5);
        assert!(!body.zones.is_empty());
        assert!(body.zones.len() <= 5);
    }

    #[actix_web::test]
    async fn zones_honour_query_parameters() {
        let app = test::init_service(App::new().app_data(seeded_state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/zones?hour=1&k=3")
            .to_request();
        let body: ApiZones = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.hour, 1);
        assert_eq!(body.k, 3);
        let zones: &[RiskZone] = &body.zones;
        assert!(zones.len() <= 3);
        assert!(zones.iter().all(|z| z.incident_count > 0));
    }

    #[actix_web::test]
    async fn zones_reject_invalid_hour() {
        let app = test::init_service(App::new().app_data(seeded_state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/zones?hour=24")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn zones_reject_zero_clusters() {
        let app = test::init_service(App::new().app_data(seeded_state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/zones?k=0").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn incidents_filter_by_hour_window() {
        let app = test::init_service(App::new().app_data(seeded_state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/incidents?hour=0")
            .to_request();
        let body: Vec<Incident> = test::call_and_read_body_json(&app, req).await;

        assert!(!body.is_empty());
        assert!(body.len() < EXPECTED_INCIDENT_COUNT);
        assert!(body.iter().all(|i| [22, 23, 0, 1, 2].contains(&i.hour)));
    }

    #[actix_web::test]
    async fn legend_lists_levels_most_severe_first() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/legend").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["level"], "High");
        assert_eq!(body[1]["level"], "Medium");
        assert_eq!(body[2]["level"], "Low");
    }
}
