use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use mindcare_core::models::assessment::{AssessmentResult, ReportedAssessment, Subscale};

use crate::error::InstrumentError;
use crate::instruments::dass21::Dass21;
use crate::Instrument;

/// Inclusive range of valid answer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: i64,
    pub max: i64,
}

impl AnswerRange {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A subscale and the 0-indexed answer positions that feed it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleDefinition {
    pub subscale: Subscale,
    pub name: String,
    pub items: Vec<usize>,
    pub description: Option<String>,
}

/// A rejected answer set. `invalid_positions` is empty when the count was
/// wrong, since positions are only checked once the length is right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub expected_items: usize,
    pub received_items: usize,
    pub invalid_positions: Vec<usize>,
    pub message: String,
}

/// Score a DASS-21 answer set.
///
/// Fails with [`InstrumentError::Validation`] unless there are exactly 21
/// answers, each in 0..=3.
pub fn compute_assessment(answers: &[i64]) -> Result<AssessmentResult, InstrumentError> {
    Dass21.score(answers)
}

/// Re-check DASS-21 scores echoed back by a client and classify them.
///
/// Fails with [`InstrumentError::InvalidScore`] for a negative, odd, or
/// above-42 score. Any level the client sent is discarded.
pub fn restore_assessment(reported: &ReportedAssessment) -> Result<AssessmentResult, InstrumentError> {
    Dass21.restore(reported)
}

/// Sum the answers at `items`. Callers validate first; positions past the end
/// contribute nothing.
pub(crate) fn item_sum(answers: &[i64], items: &[usize]) -> u32 {
    items
        .iter()
        .filter_map(|&i| answers.get(i))
        .map(|&v| u32::try_from(v).unwrap_or(0))
        .sum()
}
