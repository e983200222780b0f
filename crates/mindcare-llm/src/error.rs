use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("chat provider not configured")]
    NotConfigured,

    #[error("rate limited")]
    RateLimited,

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
