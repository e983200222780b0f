use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("message must be a string, got {found}")]
    InputType { found: &'static str },
}
