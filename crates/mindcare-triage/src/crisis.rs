//! Crisis and session-termination gate.
//!
//! Two independent text checks run on every message: self-harm phrases and
//! ordinary goodbye phrases. Both are case-insensitive substring matches.
//! When a self-harm phrase is present the emergency resources replace any
//! other recommendation for the turn, whichever check matched first.

use mindcare_core::models::assessment::AssessmentResult;
use mindcare_core::models::session::SessionSignal;
use serde_json::Value;
use tracing::{info, warn};

use crate::catalog;
use crate::error::TriageError;
use crate::recommend;

pub const SELF_HARM_KEYWORDS: [&str; 5] = [
    "harm myself",
    "kill myself",
    "suicide",
    "end my life",
    "hurt myself",
];

pub const END_SESSION_PHRASES: [&str; 4] = ["bye", "goodbye", "end session", "i want to stop"];

/// Extra phrases that close a session in the free-form chat endpoint.
pub const CHAT_END_PHRASES: [&str; 4] = ["finish", "end chat", "stop", "quit"];

/// Which conversation surface the message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnMode {
    /// Guided counselor turn: ordinary closes attach nothing.
    Counselor,
    /// Free-form chat: wider goodbye vocabulary, and an ordinary close
    /// attaches the assessment's recommendations.
    Chat,
}

impl TurnMode {
    fn matches_end_phrase(self, lowered: &str) -> bool {
        let base = END_SESSION_PHRASES.iter().any(|p| lowered.contains(p));
        match self {
            TurnMode::Counselor => base,
            TurnMode::Chat => base || CHAT_END_PHRASES.iter().any(|p| lowered.contains(p)),
        }
    }
}

/// Borrow the text of a loosely-typed message field.
pub fn message_text(value: &Value) -> Result<&str, TriageError> {
    value.as_str().ok_or(TriageError::InputType {
        found: json_type_name(value),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn detect_self_harm(message: &str) -> bool {
    let lowered = message.to_lowercase();
    SELF_HARM_KEYWORDS.iter().any(|k| lowered.contains(k))
}

pub fn detect_end_request(message: &str, mode: TurnMode) -> bool {
    mode.matches_end_phrase(&message.to_lowercase())
}

/// Combine assessment severity with the message checks.
pub fn evaluate_crisis_signals(
    message: &str,
    assessment: Option<&AssessmentResult>,
    mode: TurnMode,
) -> SessionSignal {
    let mut signal = SessionSignal {
        is_severe_case: assessment.is_some_and(AssessmentResult::is_severe_case),
        ..SessionSignal::default()
    };

    if detect_end_request(message, mode) {
        signal.should_end_session = true;
        if mode == TurnMode::Chat {
            signal.recommendations = match assessment {
                Some(result) => recommend::select_recommendations(result),
                None => recommend::general_recommendations(),
            };
        }
        info!(?mode, "user asked to end the session");
    }

    // Evaluated after the goodbye check so it always has the last word.
    if detect_self_harm(message) {
        signal.should_end_session = true;
        signal.crisis_detected = true;
        signal.recommendations = catalog::emergency().to_vec();
        warn!("self-harm language detected; ending session with emergency resources");
    }

    signal
}
