use mindcare_export::error::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid email address {address}: {reason}")]
    Address { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),

    #[error("no {report_to} recipient configured for department {department:?}")]
    NoRecipient {
        report_to: &'static str,
        department: String,
    },

    #[error("recipient directory error: {0}")]
    Directory(String),

    #[error(transparent)]
    Render(#[from] ExportError),
}
