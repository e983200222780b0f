//! Session report model and the view it is rendered from.

use jiff::civil::DateTime;
use mindcare_core::models::assessment::{AssessmentResult, Severity};
use mindcare_core::models::recommendation::Recommendation;
use mindcare_core::models::transcript::{ChatSender, ChatTurn};
use mindcare_core::models::user::UserInfo;
use mindcare_instruments::severity;
use mindcare_triage::analytics;
use serde::Serialize;

const KEY_POINT_SOURCE_LIMIT: usize = 5;
const KEY_POINT_MIN_CHARS: usize = 20;
const KEY_POINT_MAX_CHARS: usize = 100;

const EMERGENCY_RESOURCES: [&str; 4] = [
    "National Suicide Prevention Lifeline: 988",
    "Crisis Text Line: Text HOME to 741741",
    "Emergency Services: 911",
    "SAMHSA National Helpline: 1-800-662-4357",
];

const DISCLAIMER: &str = "This report is generated by an AI-powered mental health assessment tool \
and is not a substitute for professional medical advice, diagnosis, or treatment. \
Always seek the advice of qualified mental health professionals with any questions \
you may have regarding a mental health condition.";

/// Everything known about one completed session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub user: UserInfo,
    pub assessment: AssessmentResult,
    pub recommendations: Vec<Recommendation>,
    pub transcript: Vec<ChatTurn>,
    pub generated_at: DateTime,
}

/// Message counts and a few excerpts of what the user said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptSummary {
    pub total_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    pub key_points: Vec<String>,
}

impl TranscriptSummary {
    /// Returns `None` for an empty transcript.
    pub fn from_turns(turns: &[ChatTurn]) -> Option<Self> {
        if turns.is_empty() {
            return None;
        }

        let user_turns: Vec<&ChatTurn> = turns
            .iter()
            .filter(|t| t.sender == ChatSender::User)
            .collect();

        // Only the first few user messages are considered, then short ones dropped.
        let key_points = user_turns
            .iter()
            .take(KEY_POINT_SOURCE_LIMIT)
            .filter(|t| t.message.chars().count() > KEY_POINT_MIN_CHARS)
            .map(|t| excerpt(&t.message))
            .collect();

        Some(Self {
            total_messages: turns.len(),
            user_messages: user_turns.len(),
            bot_messages: turns.len() - user_turns.len(),
            key_points,
        })
    }
}

fn excerpt(message: &str) -> String {
    if message.chars().count() > KEY_POINT_MAX_CHARS {
        let cut: String = message.chars().take(KEY_POINT_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        message.to_string()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UserView {
    name: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    age: u32,
    gender: String,
    department: String,
    report_to: &'static str,
}

impl From<&UserInfo> for UserView {
    fn from(user: &UserInfo) -> Self {
        Self {
            name: user.full_name(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            age: user.age,
            gender: user.gender.clone(),
            department: user.department.clone(),
            report_to: user.report_to.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreRow {
    category: &'static str,
    score: u32,
    level: &'static str,
    severe: bool,
}

pub(crate) fn score_rows(result: &AssessmentResult) -> Vec<ScoreRow> {
    result
        .iter()
        .map(|(subscale, entry)| ScoreRow {
            category: subscale.label(),
            score: entry.score,
            level: entry.level.as_str(),
            severe: entry.level.is_severe(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct InterpretationRow {
    severity: &'static str,
    depression: String,
    anxiety: String,
    stress: String,
}

fn interpretation_rows() -> Vec<InterpretationRow> {
    Severity::ALL
        .iter()
        .map(|&level| InterpretationRow {
            severity: level.as_str(),
            depression: severity::DEPRESSION_BANDS.range_label(level),
            anxiety: severity::ANXIETY_BANDS.range_label(level),
            stress: severity::STRESS_BANDS.range_label(level),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct AnalysisView {
    overall_severity: &'static str,
    risk_level: &'static str,
    primary_concern: Option<&'static str>,
    insights: Vec<String>,
    priorities: Vec<String>,
}

/// Template context for `report.md` and `session_report.html`.
#[derive(Debug, Serialize)]
pub(crate) struct ReportView<'a> {
    generated_on: String,
    user: UserView,
    results: Vec<ScoreRow>,
    severe_case: bool,
    interpretation: Vec<InterpretationRow>,
    analysis: AnalysisView,
    recommendations: &'a [Recommendation],
    transcript: Option<TranscriptSummary>,
    emergency_resources: &'static [&'static str],
    disclaimer: &'static str,
}

impl<'a> ReportView<'a> {
    pub(crate) fn new(report: &'a SessionReport) -> Self {
        let analysis = analytics::analyze(&report.assessment);
        let priorities = analytics::treatment_priorities(&analysis);

        Self {
            generated_on: report.generated_at.strftime("%B %d, %Y").to_string(),
            user: UserView::from(&report.user),
            results: score_rows(&report.assessment),
            severe_case: report.assessment.is_severe_case(),
            interpretation: interpretation_rows(),
            analysis: AnalysisView {
                overall_severity: analysis.overall_severity.as_str(),
                risk_level: analysis.risk_level.as_str(),
                primary_concern: analysis.primary_concern.map(|s| s.label()),
                insights: analysis.insights,
                priorities,
            },
            recommendations: &report.recommendations,
            transcript: TranscriptSummary::from_turns(&report.transcript),
            emergency_resources: &EMERGENCY_RESOURCES,
            disclaimer: DISCLAIMER,
        }
    }
}

/// `MindCare_Report_{First}_{Last}_{YYYYMMDD}.docx`
pub fn report_filename(user: &UserInfo, generated_at: DateTime) -> String {
    format!(
        "MindCare_Report_{}_{}_{}.docx",
        filename_part(&user.first_name),
        filename_part(&user.last_name),
        generated_at.strftime("%Y%m%d"),
    )
}

// Keeps names usable inside a Content-Disposition header.
fn filename_part(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
