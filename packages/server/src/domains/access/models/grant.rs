use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long an approval stays valid
pub const GRANT_VALIDITY_DAYS: i64 = 365;

/// Approved, time-bounded access for one identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalGrant {
    /// Normalized email, also the key in the grant map
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl ApprovalGrant {
    /// Grant starting at `approved_at`, valid for [`GRANT_VALIDITY_DAYS`]
    pub fn starting_at(email: String, approved_at: DateTime<Utc>) -> Self {
        Self {
            email,
            expires_at: approved_at + Duration::days(GRANT_VALIDITY_DAYS),
        }
    }

    /// Valid strictly before `expires_at`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
