use mindcare_core::models::assessment::Subscale;
use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid domain '{0}': expected depression, anxiety, or stress")]
    InvalidDomain(String),

    #[error("invalid {subscale} score {score}: must be a multiple of {step} between 0 and {max}")]
    InvalidScore {
        subscale: Subscale,
        score: i64,
        step: u32,
        max: u32,
    },
}
