use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};

use mindcare_core::models::assessment::AssessmentResult;
use mindcare_core::models::user::UserInfo;

use crate::docx::plain_line;
use crate::error::ExportError;
use crate::report::{ReportView, ScoreRow, SessionReport, UserView, score_rows};

pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.md");
pub const SEVERE_ALERT_TEMPLATE: &str = include_str!("../templates/severe_alert.html");
pub const SESSION_REPORT_TEMPLATE: &str = include_str!("../templates/session_report.html");

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). Names
/// ending in `.html` are auto-escaped. Markdown templates pipe user text
/// through the `plain` filter instead.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    tera.register_filter("plain", plain_filter);

    let value = serde_json::to_value(data)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn plain_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(s) => plain_line(s),
        other => plain_line(&other.to_string()),
    };
    Ok(Value::String(text))
}

/// Markdown-ish source for [`crate::docx::generate_docx`].
pub fn render_report(report: &SessionReport) -> Result<String, ExportError> {
    render_template("report.md", REPORT_TEMPLATE, &ReportView::new(report))
}

pub fn render_session_report_email(report: &SessionReport) -> Result<String, ExportError> {
    render_template(
        "session_report.html",
        SESSION_REPORT_TEMPLATE,
        &ReportView::new(report),
    )
}

#[derive(Serialize)]
struct AlertView {
    user: UserView,
    results: Vec<ScoreRow>,
}

pub fn render_severe_alert(
    user: &UserInfo,
    assessment: &AssessmentResult,
) -> Result<String, ExportError> {
    let view = AlertView {
        user: UserView::from(user),
        results: score_rows(assessment),
    };
    render_template("severe_alert.html", SEVERE_ALERT_TEMPLATE, &view)
}
