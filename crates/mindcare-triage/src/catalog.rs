//! Static recommendation catalog. Built once on first use, never mutated.

use std::sync::LazyLock;

use mindcare_core::models::assessment::Subscale;
use mindcare_core::models::recommendation::Recommendation;

fn entries(items: &[(&str, &str)]) -> Vec<Recommendation> {
    items
        .iter()
        .map(|(title, description)| Recommendation::new(*title, *description))
        .collect()
}

static DEPRESSION: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Cognitive Behavioral Therapy (CBT)",
            "CBT helps identify and change negative thought patterns that contribute to depression.",
        ),
        (
            "Behavioral Activation",
            "Gradually increase pleasant and meaningful activities to improve mood.",
        ),
        (
            "Exercise Routine",
            "Regular physical activity can be as effective as medication for mild to moderate depression.",
        ),
        (
            "Sleep Hygiene",
            "Establish consistent sleep patterns to support mood regulation.",
        ),
    ])
});

static ANXIETY: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Deep Breathing Exercises",
            "Practice diaphragmatic breathing to activate the body's relaxation response.",
        ),
        (
            "Progressive Muscle Relaxation",
            "Systematically tense and relax muscle groups to reduce physical anxiety.",
        ),
        (
            "Mindfulness Meditation",
            "Practice staying present to reduce worry about future events.",
        ),
        (
            "Exposure Therapy",
            "Gradually face feared situations to reduce avoidance and build confidence.",
        ),
    ])
});

static STRESS: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Time Management",
            "Learn to prioritize tasks and manage time more effectively.",
        ),
        (
            "Boundary Setting",
            "Practice saying no and setting healthy limits on commitments.",
        ),
        (
            "Stress Inoculation Training",
            "Build resilience by learning to cope with manageable levels of stress.",
        ),
        (
            "Regular Breaks",
            "Schedule regular breaks throughout the day to prevent burnout.",
        ),
    ])
});

static GENERAL: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Regular Exercise",
            "Engage in physical activity to improve overall mental health.",
        ),
        (
            "Social Support",
            "Maintain connections with colleagues, friends, and family.",
        ),
        (
            "Journaling",
            "Write about thoughts and feelings to gain insight and process emotions.",
        ),
        (
            "Healthy Lifestyle",
            "Maintain good nutrition, regular exercise, and adequate sleep.",
        ),
    ])
});

static EMERGENCY: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Crisis Hotlines",
            "National Suicide Prevention Lifeline: 988. Crisis Text Line: Text HOME to 741741.",
        ),
        (
            "Professional Help",
            "Contact a mental health professional or crisis counselor immediately.",
        ),
        (
            "Support System",
            "Reach out to trusted friends, family members, or support groups.",
        ),
        (
            "Safety Planning",
            "Work with a professional to create a safety plan for managing crisis situations.",
        ),
    ])
});

// Short per-subscale lists served to the front end on demand.
static QUICK_DEPRESSION: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Professional Counseling",
            "Consider speaking with a licensed mental health professional.",
        ),
        (
            "Daily Routine",
            "Establish consistent daily routines for better mental health.",
        ),
    ])
});

static QUICK_ANXIETY: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Breathing Exercises",
            "Practice deep breathing and mindfulness techniques.",
        ),
        (
            "Gradual Exposure",
            "Gradually face anxiety-provoking situations.",
        ),
    ])
});

static QUICK_STRESS: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    entries(&[
        (
            "Stress Management",
            "Learn stress management and relaxation techniques.",
        ),
        (
            "Physical Activity",
            "Regular exercise can significantly reduce stress.",
        ),
    ])
});

/// Subscale-specific recommendations, most relevant first.
pub fn domain(subscale: Subscale) -> &'static [Recommendation] {
    match subscale {
        Subscale::Depression => &DEPRESSION,
        Subscale::Anxiety => &ANXIETY,
        Subscale::Stress => &STRESS,
    }
}

/// Recommendations that apply regardless of scores.
pub fn general() -> &'static [Recommendation] {
    &GENERAL
}

/// Crisis resources shown whenever self-harm language is detected.
pub fn emergency() -> &'static [Recommendation] {
    &EMERGENCY
}

pub fn quick_list(subscale: Subscale) -> &'static [Recommendation] {
    match subscale {
        Subscale::Depression => &QUICK_DEPRESSION,
        Subscale::Anxiety => &QUICK_ANXIETY,
        Subscale::Stress => &QUICK_STRESS,
    }
}
