//! mindcare-api
//!
//! HTTP surface for assessments, counseling chat, session reports, and the
//! optional static front end.

pub mod audit;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

use config::{AllowedOrigins, AppConfig};
use state::AppState;

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let origins = match &config.allowed_origins {
        AllowedOrigins::Any => AllowOrigin::from(Any),
        AllowedOrigins::List(list) => AllowOrigin::list(list.clone()),
    };
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/assess", post(routes::assess::assess))
        .route("/api/chat", post(routes::chat::chat))
        .route("/api/end-session", post(routes::session::end_session))
        .route("/api/download-report", post(routes::session::download_report))
        .route("/api/contact", post(routes::contact::contact))
        .route(
            "/api/recommendations/{kind}",
            get(routes::recommendations::get_recommendations),
        )
        .route("/api/instruments", get(routes::instruments::list_instruments))
        .route(
            "/api/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        );

    let api = match &config.static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.fallback(routes::not_found),
    };

    api.layer(axum_mw::from_fn(audit::audit_log))
        .layer(cors)
        .with_state(state)
}
