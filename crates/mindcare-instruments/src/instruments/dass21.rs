use mindcare_core::models::assessment::Subscale;

use crate::scoring::{AnswerRange, SubscaleDefinition};
use crate::Instrument;

/// Depression items (0-indexed): questions 3, 5, 10, 13, 16, 17, 21.
pub const DEPRESSION_ITEMS: [usize; 7] = [2, 4, 9, 12, 15, 16, 20];
/// Anxiety items (0-indexed): questions 2, 4, 7, 9, 15, 19, 20.
pub const ANXIETY_ITEMS: [usize; 7] = [1, 3, 6, 8, 14, 18, 19];
/// Stress items (0-indexed): questions 1, 6, 8, 11, 12, 14, 18.
pub const STRESS_ITEMS: [usize; 7] = [0, 5, 7, 10, 11, 13, 17];

/// DASS-21: Depression Anxiety Stress Scales, 21-item short form.
/// Each item is rated 0–3. Subscale sums are doubled so the 21-item form
/// lines up with the severity norms of the original 42-item DASS.
pub struct Dass21;

impl Instrument for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn answer_range(&self) -> AnswerRange {
        AnswerRange { min: 0, max: 3 }
    }

    fn scale_factor(&self) -> u32 {
        2
    }

    fn subscales(&self) -> &[SubscaleDefinition] {
        static SUBSCALES: std::sync::LazyLock<Vec<SubscaleDefinition>> =
            std::sync::LazyLock::new(|| {
                vec![
                    subscale(
                        Subscale::Depression,
                        &DEPRESSION_ITEMS,
                        "Dysphoria, hopelessness, lack of interest, anhedonia",
                    ),
                    subscale(
                        Subscale::Anxiety,
                        &ANXIETY_ITEMS,
                        "Autonomic arousal, situational anxiety, subjective fear",
                    ),
                    subscale(
                        Subscale::Stress,
                        &STRESS_ITEMS,
                        "Difficulty relaxing, nervous arousal, irritability",
                    ),
                ]
            });
        &SUBSCALES
    }
}

fn subscale(subscale: Subscale, items: &[usize], description: &str) -> SubscaleDefinition {
    SubscaleDefinition {
        subscale,
        name: subscale.label().to_string(),
        items: items.to_vec(),
        description: Some(description.to_string()),
    }
}
