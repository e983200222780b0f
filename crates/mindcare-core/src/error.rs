use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown subscale: {0}")]
    UnknownSubscale(String),

    #[error("unknown severity level: {0}")]
    UnknownSeverity(String),
}
