use mindcare_core::models::assessment::{AssessmentResult, Severity, SubscaleScore};
use mindcare_instruments::scoring::compute_assessment;
use mindcare_triage::catalog;
use mindcare_triage::crisis::{TurnMode, evaluate_crisis_signals, message_text};
use mindcare_triage::error::TriageError;
use serde_json::json;

fn titles(signal: &mindcare_core::models::session::SessionSignal) -> Vec<&str> {
    signal.recommendations.iter().map(|r| r.title.as_str()).collect()
}

fn severe_assessment() -> AssessmentResult {
    AssessmentResult::new(
        SubscaleScore { score: 30, level: Severity::ExtremelySevere },
        SubscaleScore { score: 4, level: Severity::Normal },
        SubscaleScore { score: 10, level: Severity::Normal },
    )
}

const EMERGENCY_TITLES: [&str; 4] = [
    "Crisis Hotlines",
    "Professional Help",
    "Support System",
    "Safety Planning",
];

#[test]
fn kill_myself_ends_session_with_emergency_list() {
    let signal = evaluate_crisis_signals("I want to kill myself", None, TurnMode::Counselor);
    assert!(signal.should_end_session);
    assert!(signal.crisis_detected);
    assert_eq!(titles(&signal), EMERGENCY_TITLES);
}

#[test]
fn self_harm_is_case_insensitive() {
    let signal = evaluate_crisis_signals("Thinking about SUICIDE lately", None, TurnMode::Chat);
    assert!(signal.crisis_detected);
    assert_eq!(titles(&signal), EMERGENCY_TITLES);
}

#[test]
fn self_harm_wins_regardless_of_assessment_state() {
    let calm = compute_assessment(&[0; 21]).unwrap();
    for assessment in [None, Some(calm), Some(severe_assessment())] {
        for mode in [TurnMode::Counselor, TurnMode::Chat] {
            let signal =
                evaluate_crisis_signals("sometimes I want to hurt myself", assessment.as_ref(), mode);
            assert!(signal.should_end_session);
            assert_eq!(titles(&signal), EMERGENCY_TITLES);
        }
    }
}

#[test]
fn self_harm_overrides_goodbye_in_same_message() {
    for mode in [TurnMode::Counselor, TurnMode::Chat] {
        let signal = evaluate_crisis_signals(
            "goodbye, I am going to end my life",
            Some(&severe_assessment()),
            mode,
        );
        assert!(signal.should_end_session);
        assert!(signal.crisis_detected);
        assert_eq!(titles(&signal), EMERGENCY_TITLES);
    }
}

#[test]
fn goodbye_closes_without_emergency_resources() {
    let counselor = evaluate_crisis_signals("goodbye", None, TurnMode::Counselor);
    assert!(counselor.should_end_session);
    assert!(!counselor.crisis_detected);
    assert!(counselor.recommendations.is_empty());

    let chat = evaluate_crisis_signals("goodbye", None, TurnMode::Chat);
    assert!(chat.should_end_session);
    assert!(!chat.crisis_detected);
    assert_eq!(titles(&chat), ["Regular Exercise", "Social Support"]);
    assert!(chat.recommendations.iter().all(|r| !EMERGENCY_TITLES.contains(&r.title.as_str())));
}

#[test]
fn chat_close_uses_assessment_recommendations() {
    let signal = evaluate_crisis_signals("I'm done, bye", Some(&severe_assessment()), TurnMode::Chat);
    assert!(signal.should_end_session);
    assert!(signal.is_severe_case);
    assert_eq!(
        titles(&signal),
        [
            "Cognitive Behavioral Therapy (CBT)",
            "Behavioral Activation",
            "Regular Exercise",
            "Social Support",
        ]
    );
}

#[test]
fn chat_only_phrases_do_not_close_counselor_turns() {
    for message in ["Can we finish up?", "end chat", "please stop", "quit"] {
        assert!(
            !evaluate_crisis_signals(message, None, TurnMode::Counselor).should_end_session,
            "{message}"
        );
        assert!(
            evaluate_crisis_signals(message, None, TurnMode::Chat).should_end_session,
            "{message}"
        );
    }
}

#[test]
fn neutral_message_keeps_conservative_defaults() {
    let signal = evaluate_crisis_signals("I had a long day at work", None, TurnMode::Chat);
    assert!(!signal.should_end_session);
    assert!(!signal.crisis_detected);
    assert!(!signal.is_severe_case);
    assert!(signal.recommendations.is_empty());
}

#[test]
fn severe_assessment_flags_without_ending() {
    let signal =
        evaluate_crisis_signals("Work has been hard", Some(&severe_assessment()), TurnMode::Counselor);
    assert!(signal.is_severe_case);
    assert!(!signal.should_end_session);
    assert!(signal.recommendations.is_empty());
}

#[test]
fn non_string_message_is_an_input_type_error() {
    assert_eq!(message_text(&json!("hello")).unwrap(), "hello");
    assert_eq!(
        message_text(&json!(42)),
        Err(TriageError::InputType { found: "number" })
    );
    assert_eq!(
        message_text(&json!(null)),
        Err(TriageError::InputType { found: "null" })
    );
    assert!(message_text(&json!({"text": "hi"})).is_err());
}

#[test]
fn emergency_catalog_has_four_entries() {
    assert_eq!(catalog::emergency().len(), 4);
}
