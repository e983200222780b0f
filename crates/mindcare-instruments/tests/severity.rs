use mindcare_core::models::assessment::{Severity, Subscale};
use mindcare_instruments::error::InstrumentError;
use mindcare_instruments::severity::{bands, classify, classify_named};

#[test]
fn depression_boundaries() {
    let cases = [
        (0, Severity::Normal),
        (9, Severity::Normal),
        (10, Severity::Mild),
        (13, Severity::Mild),
        (14, Severity::Moderate),
        (20, Severity::Moderate),
        (21, Severity::Severe),
        (27, Severity::Severe),
        (28, Severity::ExtremelySevere),
        (42, Severity::ExtremelySevere),
    ];
    for (score, expected) in cases {
        assert_eq!(classify(Subscale::Depression, score), expected, "depression {score}");
    }
}

#[test]
fn anxiety_boundaries() {
    let cases = [
        (7, Severity::Normal),
        (8, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::Severe),
        (19, Severity::Severe),
        (20, Severity::ExtremelySevere),
    ];
    for (score, expected) in cases {
        assert_eq!(classify(Subscale::Anxiety, score), expected, "anxiety {score}");
    }
}

#[test]
fn stress_boundaries() {
    let cases = [
        (14, Severity::Normal),
        (15, Severity::Mild),
        (18, Severity::Mild),
        (19, Severity::Moderate),
        (25, Severity::Moderate),
        (26, Severity::Severe),
        (33, Severity::Severe),
        (34, Severity::ExtremelySevere),
    ];
    for (score, expected) in cases {
        assert_eq!(classify(Subscale::Stress, score), expected, "stress {score}");
    }
}

#[test]
fn scores_above_scale_stay_in_top_band() {
    assert_eq!(classify(Subscale::Stress, 100), Severity::ExtremelySevere);
}

#[test]
fn classification_is_monotonic() {
    for subscale in Subscale::ALL {
        let mut previous = Severity::Normal;
        for score in 0..=42 {
            let level = classify(subscale, score);
            assert!(level >= previous, "{subscale} dropped at {score}");
            previous = level;
        }
    }
}

#[test]
fn named_lookup_accepts_known_subscales() {
    assert_eq!(classify_named("depression", 20).unwrap(), Severity::Moderate);
    assert_eq!(classify_named("anxiety", 15).unwrap(), Severity::Severe);
}

#[test]
fn named_lookup_rejects_unknown_domain() {
    for name in ["wellbeing", " Depression ", "Anxiety"] {
        match classify_named(name, 10) {
            Err(InstrumentError::InvalidDomain(got)) => assert_eq!(got, name),
            other => panic!("expected invalid domain for {name:?}, got {other:?}"),
        }
    }
}

#[test]
fn range_labels_match_interpretation_table() {
    let depression = bands(Subscale::Depression);
    assert_eq!(depression.range_label(Severity::Normal), "0-9");
    assert_eq!(depression.range_label(Severity::Moderate), "14-20");
    assert_eq!(depression.range_label(Severity::ExtremelySevere), "28+");

    let anxiety = bands(Subscale::Anxiety);
    assert_eq!(anxiety.range_label(Severity::Mild), "8-9");
    assert_eq!(anxiety.range_label(Severity::ExtremelySevere), "20+");

    let stress = bands(Subscale::Stress);
    assert_eq!(stress.range_label(Severity::Severe), "26-33");
}
