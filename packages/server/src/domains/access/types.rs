//! Access domain response types
//!
//! Serialized as-is by the HTTP layer.

use serde::{Deserialize, Serialize};

/// Result of an access request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResponse {
    pub message: String,
    pub request_id: Option<String>,
}

/// Result of a moderator approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalResponse {
    pub message: String,
}

/// Whether an identity currently holds access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingResponse {
    pub email: String,
    pub has_access: bool,
}
