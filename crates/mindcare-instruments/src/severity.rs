//! Severity bands for DASS-21 subscale scores.
//!
//! Each table stores only inclusive lower bounds. Classification checks the
//! highest band first and returns the first one the score reaches, so band
//! membership is "at or above the highest qualifying lower bound".

use mindcare_core::models::assessment::{Severity, Subscale};

use crate::error::InstrumentError;

/// Lower bounds for the four non-normal bands. Normal starts at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBands {
    pub mild: u32,
    pub moderate: u32,
    pub severe: u32,
    pub extremely_severe: u32,
}

pub const DEPRESSION_BANDS: SeverityBands = SeverityBands {
    mild: 10,
    moderate: 14,
    severe: 21,
    extremely_severe: 28,
};

pub const ANXIETY_BANDS: SeverityBands = SeverityBands {
    mild: 8,
    moderate: 10,
    severe: 15,
    extremely_severe: 20,
};

pub const STRESS_BANDS: SeverityBands = SeverityBands {
    mild: 15,
    moderate: 19,
    severe: 26,
    extremely_severe: 34,
};

impl SeverityBands {
    pub fn classify(&self, score: u32) -> Severity {
        if score >= self.extremely_severe {
            Severity::ExtremelySevere
        } else if score >= self.severe {
            Severity::Severe
        } else if score >= self.moderate {
            Severity::Moderate
        } else if score >= self.mild {
            Severity::Mild
        } else {
            Severity::Normal
        }
    }

    pub fn lower_bound(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Normal => 0,
            Severity::Mild => self.mild,
            Severity::Moderate => self.moderate,
            Severity::Severe => self.severe,
            Severity::ExtremelySevere => self.extremely_severe,
        }
    }

    /// Printable range for a band, e.g. "14-20" or "28+".
    pub fn range_label(&self, severity: Severity) -> String {
        let low = self.lower_bound(severity);
        let next = match severity {
            Severity::Normal => Some(self.mild),
            Severity::Mild => Some(self.moderate),
            Severity::Moderate => Some(self.severe),
            Severity::Severe => Some(self.extremely_severe),
            Severity::ExtremelySevere => None,
        };
        match next {
            Some(next) => format!("{low}-{}", next - 1),
            None => format!("{low}+"),
        }
    }
}

pub fn bands(subscale: Subscale) -> &'static SeverityBands {
    match subscale {
        Subscale::Depression => &DEPRESSION_BANDS,
        Subscale::Anxiety => &ANXIETY_BANDS,
        Subscale::Stress => &STRESS_BANDS,
    }
}

pub fn classify(subscale: Subscale, score: u32) -> Severity {
    bands(subscale).classify(score)
}

/// Classify by subscale name, for callers holding loosely-typed input.
pub fn classify_named(name: &str, score: u32) -> Result<Severity, InstrumentError> {
    let subscale: Subscale = name
        .parse()
        .map_err(|_| InstrumentError::InvalidDomain(name.to_string()))?;
    Ok(classify(subscale, score))
}
