use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the three DASS-21 subscales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Subscale {
    Depression,
    Anxiety,
    Stress,
}

impl Subscale {
    /// Canonical ordering used for reports, prompts, and tie-breaking.
    pub const ALL: [Subscale; 3] = [Subscale::Depression, Subscale::Anxiety, Subscale::Stress];

    pub fn as_str(self) -> &'static str {
        match self {
            Subscale::Depression => "depression",
            Subscale::Anxiety => "anxiety",
            Subscale::Stress => "stress",
        }
    }

    /// Capitalized name for human-facing output.
    pub fn label(self) -> &'static str {
        match self {
            Subscale::Depression => "Depression",
            Subscale::Anxiety => "Anxiety",
            Subscale::Stress => "Stress",
        }
    }
}

impl fmt::Display for Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subscale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depression" => Ok(Subscale::Depression),
            "anxiety" => Ok(Subscale::Anxiety),
            "stress" => Ok(Subscale::Stress),
            _ => Err(CoreError::UnknownSubscale(s.to_string())),
        }
    }
}

/// Ordinal severity band. Variant order is the clinical order, so `Ord`
/// comparisons (`level >= Severity::Severe`) are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "Extremely Severe")]
    ExtremelySevere,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Normal,
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::ExtremelySevere,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::ExtremelySevere => "Extremely Severe",
        }
    }

    /// Severe or Extremely Severe.
    pub fn is_severe(self) -> bool {
        self >= Severity::Severe
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}

/// Scaled score and severity band for a single subscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    /// Sum of the subscale's items, doubled (0–42).
    pub score: u32,
    pub level: Severity,
}

/// The scored outcome of one DASS-21 submission.
///
/// Built by an instrument, either from answers or by re-checking a
/// [`ReportedAssessment`], and never mutated afterwards. The fields are
/// private so callers can only read them. Serializes to the
/// `{"depression": {"score", "level"}, ...}` shape the front end consumes.
/// There is no `Deserialize`: levels always come from the severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    depression: SubscaleScore,
    anxiety: SubscaleScore,
    stress: SubscaleScore,
}

impl AssessmentResult {
    pub fn new(depression: SubscaleScore, anxiety: SubscaleScore, stress: SubscaleScore) -> Self {
        Self {
            depression,
            anxiety,
            stress,
        }
    }

    pub fn depression(&self) -> SubscaleScore {
        self.depression
    }

    pub fn anxiety(&self) -> SubscaleScore {
        self.anxiety
    }

    pub fn stress(&self) -> SubscaleScore {
        self.stress
    }

    pub fn get(&self, subscale: Subscale) -> SubscaleScore {
        match subscale {
            Subscale::Depression => self.depression,
            Subscale::Anxiety => self.anxiety,
            Subscale::Stress => self.stress,
        }
    }

    /// Subscales in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Subscale, SubscaleScore)> + '_ {
        Subscale::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// True when any subscale reached Severe or Extremely Severe.
    pub fn is_severe_case(&self) -> bool {
        self.iter().any(|(_, s)| s.level.is_severe())
    }
}

/// A subscale score as sent back by a client. Any `level` on the wire is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[ts(export)]
pub struct ReportedScore {
    pub score: i64,
}

/// Assessment scores echoed by the front end on later requests. Unchecked
/// until an instrument restores it into an [`AssessmentResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[ts(export)]
pub struct ReportedAssessment {
    pub depression: ReportedScore,
    pub anxiety: ReportedScore,
    pub stress: ReportedScore,
}

impl ReportedAssessment {
    pub fn get(&self, subscale: Subscale) -> i64 {
        match subscale {
            Subscale::Depression => self.depression.score,
            Subscale::Anxiety => self.anxiety.score,
            Subscale::Stress => self.stress.score,
        }
    }
}
