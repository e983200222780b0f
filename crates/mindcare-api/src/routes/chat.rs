use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use mindcare_core::models::assessment::{AssessmentResult, ReportedAssessment};
use mindcare_core::models::recommendation::Recommendation;
use mindcare_instruments::scoring::restore_assessment;
use mindcare_llm::chat::{ChatMessage, sanitize_history};
use mindcare_llm::error::LlmError;
use mindcare_llm::prompt::build_system_prompt;
use mindcare_triage::crisis::{TurnMode, evaluate_crisis_signals, message_text};

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::routes::timestamp;
use crate::state::AppState;

pub const FALLBACK_REPLY: &str = "I'm having some technical difficulties right now. \
Could you please rephrase your message or try again?";

pub const RATE_LIMITED_REPLY: &str = "I'm receiving a lot of messages right now. \
Please give me a moment and try again.";

pub const CLOSING_NOTE: &str =
    " Thank you for our session today. I've prepared some recommendations for you.";

pub const CRISIS_NOTE: &str = " I'm really concerned about your safety. \
Please reach out for immediate help: National Suicide Prevention Lifeline: 988. \
Crisis Text Line: Text HOME to 741741. \
I think it's best that we end our session here so you can connect with someone who can support you right now.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Any JSON value; anything but a string is rejected with 400.
    pub message: Value,
    #[serde(default)]
    pub assessment_results: Option<ReportedAssessment>,
    #[serde(default)]
    pub session_history: Option<Vec<Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    success: bool,
    response: String,
    should_end_session: bool,
    recommendations: Option<Vec<Recommendation>>,
    crisis_detected: bool,
    timestamp: String,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let text = message_text(&req.message)?;
    let assessment = req
        .assessment_results
        .as_ref()
        .map(restore_assessment)
        .transpose()?;
    let assessment = assessment.as_ref();

    let signal = evaluate_crisis_signals(text, assessment, TurnMode::Chat);

    let history = sanitize_history(req.session_history.as_deref().unwrap_or_default());
    let mut response = generate_reply(&state, text, assessment, history).await;

    if signal.crisis_detected {
        response.push_str(CRISIS_NOTE);
        AuditEvent::new("crisis_detected", "chat", "anonymous")
            .with_details(json!({ "severeCase": signal.is_severe_case }))
            .emit();
    } else if signal.should_end_session {
        response.push_str(CLOSING_NOTE);
    }

    info!(
        should_end = signal.should_end_session,
        crisis = signal.crisis_detected,
        message_chars = text.chars().count(),
        "chat turn handled"
    );

    Ok(Json(ChatResponse {
        success: true,
        response,
        should_end_session: signal.should_end_session,
        recommendations: signal.should_end_session.then_some(signal.recommendations),
        crisis_detected: signal.crisis_detected,
        timestamp: timestamp(),
    }))
}

/// Ask the chat model for a reply. Any failure becomes a fixed fallback.
async fn generate_reply(
    state: &AppState,
    text: &str,
    assessment: Option<&AssessmentResult>,
    mut history: Vec<ChatMessage>,
) -> String {
    let Some(provider) = &state.llm else {
        return FALLBACK_REPLY.to_string();
    };

    let system_prompt = build_system_prompt(assessment);
    history.push(ChatMessage::user(text));

    match provider.generate_response(&system_prompt, &history).await {
        Ok(reply) => reply,
        Err(LlmError::RateLimited) => {
            warn!(provider = provider.name(), "chat provider rate limited");
            RATE_LIMITED_REPLY.to_string()
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "chat provider failed");
            FALLBACK_REPLY.to_string()
        }
    }
}
