use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use mindcare_core::models::assessment::AssessmentResult;
use mindcare_core::models::user::UserInfo;
use mindcare_instruments::scoring::compute_assessment;

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::routes::{alert_severe_case, timestamp};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessRequest {
    pub answers: Vec<i64>,
    pub user_info: UserInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessResponse {
    success: bool,
    results: AssessmentResult,
    user_info: UserInfo,
    severe_case_detected: bool,
    timestamp: String,
}

/// Score a DASS-21 submission. A severe result alerts the user's chosen
/// recipient before the response is returned.
pub async fn assess(
    State(state): State<AppState>,
    Json(req): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, ApiError> {
    let results = compute_assessment(&req.answers).inspect_err(|e| {
        warn!(error = %e, received = req.answers.len(), "rejected assessment submission");
    })?;

    let severe = results.is_severe_case();
    info!(
        depression = results.depression().score,
        anxiety = results.anxiety().score,
        stress = results.stress().score,
        severe,
        "assessment scored"
    );

    if severe {
        AuditEvent::new("severe_case_detected", "assessment", &req.user_info.email)
            .with_details(json!({
                "department": req.user_info.department,
                "results": results,
            }))
            .emit();
        alert_severe_case(&state, &req.user_info, &results).await;
    }

    Ok(Json(AssessResponse {
        success: true,
        results,
        user_info: req.user_info,
        severe_case_detected: severe,
        timestamp: timestamp(),
    }))
}
