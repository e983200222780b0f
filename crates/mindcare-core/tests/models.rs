use mindcare_core::error::CoreError;
use mindcare_core::models::assessment::{
    AssessmentResult, ReportedAssessment, Severity, Subscale, SubscaleScore,
};
use mindcare_core::models::user::{ReportRecipient, UserInfo};

fn score(score: u32, level: Severity) -> SubscaleScore {
    SubscaleScore { score, level }
}

#[test]
fn severity_order_is_clinical_order() {
    assert!(Severity::Normal < Severity::Mild);
    assert!(Severity::Mild < Severity::Moderate);
    assert!(Severity::Moderate < Severity::Severe);
    assert!(Severity::Severe < Severity::ExtremelySevere);
    assert!(Severity::Severe.is_severe());
    assert!(Severity::ExtremelySevere.is_severe());
    assert!(!Severity::Moderate.is_severe());
}

#[test]
fn severity_serializes_with_display_names() {
    let json = serde_json::to_string(&Severity::ExtremelySevere).unwrap();
    assert_eq!(json, "\"Extremely Severe\"");
    let parsed: Severity = serde_json::from_str("\"Moderate\"").unwrap();
    assert_eq!(parsed, Severity::Moderate);
    assert_eq!("extremely severe".parse::<Severity>().unwrap(), Severity::ExtremelySevere);
}

#[test]
fn subscale_names_match_exactly() {
    assert_eq!("depression".parse::<Subscale>().unwrap(), Subscale::Depression);
    assert_eq!("stress".parse::<Subscale>().unwrap(), Subscale::Stress);
    for name in ["wellbeing", "Depression", " stress ", ""] {
        assert_eq!(
            name.parse::<Subscale>(),
            Err(CoreError::UnknownSubscale(name.to_string()))
        );
    }
}

#[test]
fn assessment_result_wire_shape() {
    let result = AssessmentResult::new(
        score(28, Severity::ExtremelySevere),
        score(6, Severity::Normal),
        score(16, Severity::Mild),
    );

    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value["depression"]["score"], 28);
    assert_eq!(value["depression"]["level"], "Extremely Severe");
    assert_eq!(value["anxiety"]["level"], "Normal");
    assert_eq!(value["stress"]["score"], 16);

    let echoed: ReportedAssessment = serde_json::from_value(value).unwrap();
    assert_eq!(echoed.get(Subscale::Depression), 28);
    assert_eq!(echoed.get(Subscale::Anxiety), 6);
    assert_eq!(echoed.stress.score, 16);
}

#[test]
fn reported_scores_ignore_levels_and_keep_raw_values() {
    let echoed: ReportedAssessment = serde_json::from_value(serde_json::json!({
        "depression": {"score": 43, "level": "Normal"},
        "anxiety": {"score": -4},
        "stress": {"score": 7, "level": "not a level"}
    }))
    .unwrap();
    assert_eq!(echoed.depression.score, 43);
    assert_eq!(echoed.anxiety.score, -4);
    assert_eq!(echoed.stress.score, 7);
}

#[test]
fn severe_case_requires_severe_band() {
    let moderate = AssessmentResult::new(
        score(20, Severity::Moderate),
        score(14, Severity::Moderate),
        score(25, Severity::Moderate),
    );
    assert!(!moderate.is_severe_case());

    let severe_stress = AssessmentResult::new(
        score(0, Severity::Normal),
        score(0, Severity::Normal),
        score(26, Severity::Severe),
    );
    assert!(severe_stress.is_severe_case());
    assert_eq!(severe_stress.get(Subscale::Stress).score, 26);
}

#[test]
fn user_info_uses_camel_case() {
    let user: UserInfo = serde_json::from_value(serde_json::json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "555-0100",
        "age": 36,
        "gender": "female",
        "department": "IT",
        "reportTo": "hr"
    }))
    .unwrap();

    assert_eq!(user.full_name(), "Ada Lovelace");
    assert_eq!(user.report_to, ReportRecipient::Hr);
    assert_eq!(user.report_to.label(), "HR Department");
}
