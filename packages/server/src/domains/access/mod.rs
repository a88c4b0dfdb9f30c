//! Access domain - email-based access requests gated by a single moderator
//!
//! Lifecycle:
//!   submit_request → AccessRequest{pending} → approve_request (moderator only)
//!   → AccessRequest{approved} + ApprovalGrant{expires_at = now + 365d}
//!
//! Responsibilities:
//! - Request issuance and dedup against unexpired grants
//! - Moderator-gated approval
//! - Standing checks (moderator, or unexpired grant)
//! - Fire-and-forget mail to the moderator / requester

pub mod errors;
pub mod models;
pub mod service;
pub mod types;

pub use errors::AccessError;
pub use models::{AccessRequest, AccessRequestStatus, ApprovalGrant, GRANT_VALIDITY_DAYS};
pub use service::{AccessControlService, SubmitOutcome};
pub use types::{AccessResponse, ApprovalResponse, StandingResponse};
