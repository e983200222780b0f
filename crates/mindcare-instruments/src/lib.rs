//! mindcare-instruments
//!
//! Questionnaire definitions and scoring. Pure data and arithmetic, no I/O.
//! Defines the item groupings, answer range, and severity bands for each
//! supported instrument (currently the DASS-21).

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod severity;

use mindcare_core::models::assessment::{
    AssessmentResult, ReportedAssessment, Subscale, SubscaleScore,
};

use error::InstrumentError;
use scoring::{AnswerRange, SubscaleDefinition, ValidationError};

/// Trait implemented by each self-report questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "dass21").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DASS-21").
    fn name(&self) -> &str;

    /// Inclusive range every answer must fall in.
    fn answer_range(&self) -> AnswerRange;

    /// Multiplier applied to each subscale's item sum.
    fn scale_factor(&self) -> u32;

    /// The subscales this instrument measures, with their item positions.
    fn subscales(&self) -> &[SubscaleDefinition];

    /// Total number of answers a submission must contain.
    fn item_count(&self) -> usize {
        self.subscales().iter().map(|s| s.items.len()).sum()
    }

    fn subscale(&self, subscale: Subscale) -> Option<&SubscaleDefinition> {
        self.subscales().iter().find(|d| d.subscale == subscale)
    }

    /// Check answer count and range. Out-of-range values are reported by
    /// position and never clamped.
    fn validate_answers(&self, answers: &[i64]) -> Result<(), ValidationError> {
        let expected = self.item_count();
        if answers.len() != expected {
            return Err(ValidationError {
                expected_items: expected,
                received_items: answers.len(),
                invalid_positions: Vec::new(),
                message: format!(
                    "{}: expected {expected} answers, received {}",
                    self.name(),
                    answers.len()
                ),
            });
        }

        let range = self.answer_range();
        let invalid_positions: Vec<usize> = answers
            .iter()
            .enumerate()
            .filter(|(_, value)| !range.contains(**value))
            .map(|(i, _)| i)
            .collect();

        if !invalid_positions.is_empty() {
            return Err(ValidationError {
                expected_items: expected,
                received_items: answers.len(),
                message: format!(
                    "{}: answers must be between {} and {}; invalid values at positions {:?}",
                    self.name(),
                    range.min,
                    range.max,
                    invalid_positions
                ),
                invalid_positions,
            });
        }

        Ok(())
    }

    /// Validate, sum each subscale's items, scale, and classify.
    fn score(&self, answers: &[i64]) -> Result<AssessmentResult, InstrumentError> {
        self.validate_answers(answers)?;

        let score_for = |subscale: Subscale| {
            let items = self
                .subscale(subscale)
                .map(|d| d.items.as_slice())
                .unwrap_or(&[]);
            let score = scoring::item_sum(answers, items) * self.scale_factor();
            SubscaleScore {
                score,
                level: severity::classify(subscale, score),
            }
        };

        Ok(AssessmentResult::new(
            score_for(Subscale::Depression),
            score_for(Subscale::Anxiety),
            score_for(Subscale::Stress),
        ))
    }

    /// Highest scaled score a subscale can reach.
    fn max_score(&self, subscale: Subscale) -> u32 {
        let items = self.subscale(subscale).map_or(0, |d| d.items.len());
        let top = u32::try_from(self.answer_range().max).unwrap_or(0);
        u32::try_from(items).unwrap_or(0) * top * self.scale_factor()
    }

    /// Rebuild a result from scores a client sent back. Each score must be
    /// reachable from some answer set; levels are always re-derived.
    fn restore(&self, reported: &ReportedAssessment) -> Result<AssessmentResult, InstrumentError> {
        let restore_one = |subscale: Subscale| -> Result<SubscaleScore, InstrumentError> {
            let max = self.max_score(subscale);
            let step = self.scale_factor();
            let raw = reported.get(subscale);
            let score = u32::try_from(raw)
                .ok()
                .filter(|s| *s <= max && s.checked_rem(step) == Some(0))
                .ok_or(InstrumentError::InvalidScore {
                    subscale,
                    score: raw,
                    step,
                    max,
                })?;
            Ok(SubscaleScore {
                score,
                level: severity::classify(subscale, score),
            })
        };

        Ok(AssessmentResult::new(
            restore_one(Subscale::Depression)?,
            restore_one(Subscale::Anxiety)?,
            restore_one(Subscale::Stress)?,
        ))
    }

    /// Format a result as structured text for inclusion in a chat prompt.
    fn to_structured_input(&self, result: &AssessmentResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for definition in self.subscales() {
            let entry = result.get(definition.subscale);
            output.push_str(&format!(
                "- {}: {} ({})\n",
                definition.name, entry.score, entry.level
            ));
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::dass21::Dass21)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
