use mindcare_instruments::scoring::compute_assessment;
use mindcare_llm::prompt::build_system_prompt;

#[test]
fn prompt_without_assessment_is_persona_only() {
    let prompt = build_system_prompt(None);
    assert!(prompt.starts_with("You are MindCare"));
    assert!(prompt.contains("988"));
    assert!(!prompt.contains("DASS-21\n"));
}

#[test]
fn prompt_includes_scores_and_levels() {
    let result = compute_assessment(&[1; 21]).unwrap();
    let prompt = build_system_prompt(Some(&result));

    assert!(prompt.contains("## DASS-21"));
    assert!(prompt.contains("- Depression: 14 (Moderate)"));
    assert!(prompt.contains("- Anxiety: 14 (Moderate)"));
    assert!(prompt.contains("- Stress: 14 (Normal)"));
    assert!(!prompt.contains("The user has severe symptoms"));
}

#[test]
fn severe_assessment_adds_safety_instruction() {
    let result = compute_assessment(&[3; 21]).unwrap();
    let prompt = build_system_prompt(Some(&result));
    assert!(prompt.contains("The user has severe symptoms"));
}
