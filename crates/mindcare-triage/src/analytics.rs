//! Whole-assessment summary used in reports: an overall severity and risk
//! level from the highest subscale score, the primary concern, and short
//! clinical insights.

use std::fmt;

use mindcare_core::models::assessment::{AssessmentResult, Severity, Subscale};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAnalysis {
    pub overall_severity: Severity,
    pub risk_level: RiskLevel,
    pub primary_concern: Option<Subscale>,
    pub insights: Vec<String>,
}

const MAX_PRIORITIES: usize = 5;

pub fn analyze(result: &AssessmentResult) -> ScoreAnalysis {
    let max_score = result.iter().map(|(_, s)| s.score).max().unwrap_or(0);

    // Uniform cutoffs over the highest score, independent of the subscale.
    let (overall_severity, risk_level) = match max_score {
        28.. => (Severity::ExtremelySevere, RiskLevel::VeryHigh),
        21.. => (Severity::Severe, RiskLevel::High),
        14.. => (Severity::Moderate, RiskLevel::Moderate),
        8.. => (Severity::Mild, RiskLevel::Low),
        _ => (Severity::Normal, RiskLevel::Low),
    };

    // First subscale in canonical order wins ties.
    let primary_concern = result
        .iter()
        .fold(None::<(Subscale, u32)>, |best, (subscale, entry)| match best {
            Some((_, top)) if top >= entry.score => best,
            _ => Some((subscale, entry.score)),
        })
        .filter(|(_, score)| *score > 0)
        .map(|(subscale, _)| subscale);

    let mut insights = Vec::new();
    if result.depression().score >= 14 {
        insights.push("Depression symptoms are significantly impacting daily functioning".to_string());
    }
    if result.anxiety().score >= 15 {
        insights.push(
            "Anxiety levels are in the severe range and may require immediate attention".to_string(),
        );
    }
    if result.stress().score >= 26 {
        insights.push("Stress levels are very high and may be affecting physical health".to_string());
    }
    let elevated = result.iter().filter(|(_, s)| s.score >= 14).count();
    if elevated >= 2 {
        insights.push(
            "Multiple areas of concern detected - comprehensive treatment approach recommended"
                .to_string(),
        );
    }

    ScoreAnalysis {
        overall_severity,
        risk_level,
        primary_concern,
        insights,
    }
}

/// Ordered treatment focus areas, at most five.
pub fn treatment_priorities(analysis: &ScoreAnalysis) -> Vec<String> {
    let mut priorities: Vec<&str> = Vec::new();

    if analysis.risk_level >= RiskLevel::High {
        priorities.push("Immediate professional intervention");
        priorities.push("Safety planning and crisis resources");
    }

    match analysis.primary_concern {
        Some(Subscale::Depression) => priorities.extend([
            "Mood stabilization techniques",
            "Behavioral activation strategies",
            "Sleep and routine optimization",
        ]),
        Some(Subscale::Anxiety) => priorities.extend([
            "Anxiety management techniques",
            "Relaxation and breathing exercises",
            "Gradual exposure therapy",
        ]),
        Some(Subscale::Stress) => priorities.extend([
            "Stress reduction strategies",
            "Time management and boundaries",
            "Physical wellness activities",
        ]),
        None => {}
    }

    priorities.extend([
        "Social support enhancement",
        "Self-care routine development",
        "Regular progress monitoring",
    ]);

    priorities
        .into_iter()
        .take(MAX_PRIORITIES)
        .map(str::to_string)
        .collect()
}
