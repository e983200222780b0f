use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::routes::timestamp;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    assessment: &'static str,
    chat: &'static str,
    contact: &'static str,
    end_session: &'static str,
    download_report: &'static str,
    recommendations: &'static str,
    instruments: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: String,
    llm: &'static str,
    email: &'static str,
    static_files: &'static str,
    endpoints: Endpoints,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "MindCare API",
        timestamp: timestamp(),
        llm: if state.llm.is_some() { "connected" } else { "disconnected" },
        email: if state.notifier.is_some() { "configured" } else { "not configured" },
        static_files: if state.static_files { "configured" } else { "not configured" },
        endpoints: Endpoints {
            assessment: "/api/assess",
            chat: "/api/chat",
            contact: "/api/contact",
            end_session: "/api/end-session",
            download_report: "/api/download-report",
            recommendations: "/api/recommendations/{type}",
            instruments: "/api/instruments",
        },
    })
}
