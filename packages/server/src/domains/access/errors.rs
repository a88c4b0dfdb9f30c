use thiserror::Error;

use crate::common::InvalidEmail;

/// Failures surfaced by the access workflow.
///
/// Each variant maps to a distinct HTTP status in `server::error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Request not found")]
    NotFound,

    #[error("Request already processed")]
    AlreadyProcessed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<InvalidEmail> for AccessError {
    fn from(err: InvalidEmail) -> Self {
        AccessError::Validation(err.to_string())
    }
}
