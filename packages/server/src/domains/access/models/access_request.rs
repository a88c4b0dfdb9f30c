use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Length of the hex prefix kept from the request hash
pub const REQUEST_ID_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRequestStatus {
    Pending,
    Approved,
}

impl std::fmt::Display for AccessRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessRequestStatus::Pending => write!(f, "pending"),
            AccessRequestStatus::Approved => write!(f, "approved"),
        }
    }
}

/// A request for access, kept after approval for audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub request_id: String,
    /// Normalized (lower-cased) email
    pub email: String,
    pub submitted_at: DateTime<Utc>,
    pub status: AccessRequestStatus,
}

impl AccessRequest {
    pub fn pending(request_id: String, email: String, submitted_at: DateTime<Utc>) -> Self {
        Self {
            request_id,
            email,
            submitted_at,
            status: AccessRequestStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == AccessRequestStatus::Pending
    }
}

/// Generate a short request ID.
///
/// SHA256 over the email, a second-granularity timestamp and a random nonce,
/// truncated to [`REQUEST_ID_LEN`] hex characters. The nonce keeps two
/// requests in the same second apart; callers still have to check the
/// truncated ID against the IDs they already hold.
pub fn generate_request_id(email: &str, at: DateTime<Utc>) -> String {
    let timestamp = at.format("%Y%m%d%H%M%S");
    let nonce = Uuid::new_v4();

    let mut hasher = Sha256::new();
    hasher.update(format!("{email}{timestamp}{nonce}").as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(REQUEST_ID_LEN);
    id
}
