use std::sync::Arc;

use mindcare_core::models::assessment::AssessmentResult;
use mindcare_core::models::user::UserInfo;
use mindcare_export::docx::{DOCX_CONTENT_TYPE, generate_docx};
use mindcare_export::render::{render_report, render_session_report_email, render_severe_alert};
use mindcare_export::report::{SessionReport, report_filename};
use mindcare_export::styles::DocumentStyles;
use tracing::info;

use crate::error::NotifyError;
use crate::mailer::{EmailAttachment, Mailer, OutgoingEmail};
use crate::recipients::RecipientDirectory;

pub fn severe_alert_subject(user: &UserInfo) -> String {
    format!(
        "URGENT: Mental Health Alert - {} ({})",
        user.full_name(),
        user.department
    )
}

pub fn session_report_subject(user: &UserInfo) -> String {
    format!(
        "Mental Health Session Report - {} ({})",
        user.full_name(),
        user.department
    )
}

/// Renders notifications and hands them to a [`Mailer`].
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    directory: RecipientDirectory,
    styles: DocumentStyles,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, directory: RecipientDirectory) -> Self {
        Self {
            mailer,
            directory,
            styles: DocumentStyles::default(),
        }
    }

    /// Returns the address the alert went to.
    pub async fn send_severe_case_alert(
        &self,
        user: &UserInfo,
        assessment: &AssessmentResult,
    ) -> Result<String, NotifyError> {
        let to = self
            .directory
            .recipient_for(user.report_to, &user.department)?
            .to_string();

        let email = OutgoingEmail {
            to,
            subject: severe_alert_subject(user),
            html: render_severe_alert(user, assessment)?,
            attachments: Vec::new(),
        };

        self.mailer.send(&email).await?;
        info!(recipient = %email.to, department = %user.department, "severe case alert sent");
        Ok(email.to)
    }

    /// Sends the HTML summary with the DOCX report attached. Returns the
    /// address the report went to.
    pub async fn send_session_report(&self, report: &SessionReport) -> Result<String, NotifyError> {
        let user = &report.user;
        let to = self
            .directory
            .recipient_for(user.report_to, &user.department)?
            .to_string();

        let document = generate_docx(&render_report(report)?, &self.styles)?;

        let email = OutgoingEmail {
            to,
            subject: session_report_subject(user),
            html: render_session_report_email(report)?,
            attachments: vec![EmailAttachment {
                filename: report_filename(user, report.generated_at),
                content_type: DOCX_CONTENT_TYPE.to_string(),
                content: document,
            }],
        };

        self.mailer.send(&email).await?;
        info!(
            recipient = %email.to,
            department = %user.department,
            transcript_turns = report.transcript.len(),
            "session report sent"
        );
        Ok(email.to)
    }
}
