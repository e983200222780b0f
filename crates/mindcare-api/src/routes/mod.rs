pub mod assess;
pub mod chat;
pub mod contact;
pub mod health;
pub mod instruments;
pub mod recommendations;
pub mod session;

use axum::http::Uri;
use mindcare_core::models::assessment::AssessmentResult;
use mindcare_core::models::user::UserInfo;
use serde_json::json;
use tracing::{error, warn};

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::state::AppState;

/// RFC 3339 timestamp stamped on every response body.
pub(crate) fn timestamp() -> String {
    jiff::Timestamp::now().to_string()
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("The endpoint {} was not found", uri.path()))
}

/// Alert the user's chosen recipient about a severe result. Delivery
/// failures are logged and never fail the caller.
pub(crate) async fn alert_severe_case(
    state: &AppState,
    user: &UserInfo,
    assessment: &AssessmentResult,
) {
    let Some(notifier) = &state.notifier else {
        warn!(department = %user.department, "email delivery not configured; severe case alert not sent");
        return;
    };

    match notifier.send_severe_case_alert(user, assessment).await {
        Ok(recipient) => AuditEvent::new("severe_alert_sent", "notification", &user.email)
            .with_details(json!({
                "recipient": recipient,
                "reportTo": user.report_to,
                "department": user.department,
            }))
            .emit(),
        Err(e) => error!(error = %e, department = %user.department, "failed to send severe case alert"),
    }
}
