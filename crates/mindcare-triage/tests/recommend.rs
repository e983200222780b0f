use std::collections::HashSet;

use mindcare_core::models::assessment::{AssessmentResult, Severity, SubscaleScore};
use mindcare_instruments::scoring::compute_assessment;
use mindcare_triage::recommend::{MAX_RECOMMENDATIONS, recommendations_for, select_recommendations};

fn result(depression: u32, anxiety: u32, stress: u32) -> AssessmentResult {
    // Levels are irrelevant to the selector; it only reads raw scores.
    let entry = |score| SubscaleScore { score, level: Severity::Normal };
    AssessmentResult::new(entry(depression), entry(anxiety), entry(stress))
}

fn titles(result: &AssessmentResult) -> Vec<String> {
    select_recommendations(result)
        .into_iter()
        .map(|r| r.title)
        .collect()
}

#[test]
fn low_scores_get_general_only() {
    assert_eq!(titles(&result(0, 0, 0)), ["Regular Exercise", "Social Support"]);
}

#[test]
fn cutoff_is_fourteen_for_every_subscale() {
    // Anxiety 12 is already Moderate on its own table but stays below the
    // flat cutoff.
    assert_eq!(titles(&result(13, 12, 13)), ["Regular Exercise", "Social Support"]);
    assert_eq!(
        titles(&result(0, 14, 0)),
        [
            "Deep Breathing Exercises",
            "Progressive Muscle Relaxation",
            "Regular Exercise",
            "Social Support",
        ]
    );
}

#[test]
fn all_elevated_is_truncated_to_six() {
    assert_eq!(
        titles(&result(42, 42, 42)),
        [
            "Cognitive Behavioral Therapy (CBT)",
            "Behavioral Activation",
            "Deep Breathing Exercises",
            "Progressive Muscle Relaxation",
            "Time Management",
            "Boundary Setting",
        ]
    );
}

#[test]
fn never_more_than_six_and_never_duplicate_titles() {
    for d in (0..=42).step_by(7) {
        for a in (0..=42).step_by(7) {
            for s in (0..=42).step_by(7) {
                let recs = select_recommendations(&result(d, a, s));
                assert!(recs.len() <= MAX_RECOMMENDATIONS);
                let unique: HashSet<_> = recs.iter().map(|r| &r.title).collect();
                assert_eq!(unique.len(), recs.len());
            }
        }
    }
}

#[test]
fn selection_is_deterministic() {
    let scored = compute_assessment(&[2; 21]).unwrap();
    assert_eq!(select_recommendations(&scored), select_recommendations(&scored));
}

#[test]
fn quick_lists_by_name() {
    let depression = recommendations_for("depression");
    assert_eq!(depression.len(), 2);
    assert_eq!(depression[0].title, "Professional Counseling");
    assert_eq!(recommendations_for("stress")[1].title, "Physical Activity");
    assert!(recommendations_for("sleep").is_empty());
    assert!(recommendations_for("Stress").is_empty());
}
