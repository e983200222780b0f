use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use jiff::Zoned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use mindcare_core::models::assessment::ReportedAssessment;
use mindcare_core::models::recommendation::Recommendation;
use mindcare_core::models::transcript::ChatTurn;
use mindcare_core::models::user::UserInfo;
use mindcare_export::docx::{DOCX_CONTENT_TYPE, generate_docx};
use mindcare_export::render::render_report;
use mindcare_export::report::{SessionReport, report_filename};
use mindcare_export::styles::DocumentStyles;
use mindcare_instruments::scoring::restore_assessment;
use mindcare_triage::recommend::select_recommendations;

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::routes::{alert_severe_case, timestamp};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndRequest {
    pub assessment_results: ReportedAssessment,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
    pub user_info: UserInfo,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl SessionEndRequest {
    /// Re-check the echoed scores. An empty recommendation list is filled
    /// from the assessment.
    fn into_report(self) -> Result<SessionReport, ApiError> {
        let assessment = restore_assessment(&self.assessment_results)?;
        let recommendations = if self.recommendations.is_empty() {
            select_recommendations(&assessment)
        } else {
            self.recommendations
        };

        Ok(SessionReport {
            user: self.user_info,
            assessment,
            recommendations,
            transcript: self.chat_history,
            generated_at: Zoned::now().datetime(),
        })
    }
}

#[derive(Serialize)]
pub struct SessionEndResponse {
    success: bool,
    message: &'static str,
    timestamp: String,
}

/// Close a session: alert on severe results, then mail the session report.
pub async fn end_session(
    State(state): State<AppState>,
    Json(req): Json<SessionEndRequest>,
) -> Result<Json<SessionEndResponse>, ApiError> {
    let notifier = state
        .notifier
        .clone()
        .ok_or_else(|| ApiError::Unavailable("email delivery is not configured".to_string()))?;

    let report = req.into_report()?;

    if report.assessment.is_severe_case() {
        alert_severe_case(&state, &report.user, &report.assessment).await;
    }

    let recipient = notifier.send_session_report(&report).await?;
    AuditEvent::new("session_report_sent", "session", &report.user.email)
        .with_details(json!({
            "recipient": recipient,
            "department": report.user.department,
            "messages": report.transcript.len(),
        }))
        .emit();

    Ok(Json(SessionEndResponse {
        success: true,
        message: "Session ended successfully. Report sent to designated recipient.",
        timestamp: timestamp(),
    }))
}

/// Render the session report as a DOCX attachment.
pub async fn download_report(
    Json(req): Json<SessionEndRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = req.into_report()?;
    let rendered = render_report(&report)?;
    let bytes = generate_docx(&rendered, &DocumentStyles::default())?;

    let filename = report_filename(&report.user, report.generated_at);
    info!(%filename, size = bytes.len(), "report generated");

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
