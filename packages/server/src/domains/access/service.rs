//! Access control service
//!
//! Owns the request map and the grant map. Both live in one [`AccessStore`]
//! behind a single mutex, and every read-modify-write in submit/approve runs
//! under that one guard. The guard is never held across an `.await`:
//! notifications are spawned after it is released.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::common::{normalize_email, parse_email};
use crate::domains::access::errors::AccessError;
use crate::domains::access::models::{
    generate_request_id, AccessRequest, AccessRequestStatus, ApprovalGrant,
};
use crate::domains::access::types::{AccessResponse, ApprovalResponse};
use crate::kernel::ServerDeps;

const MSG_GRANTED_IMMEDIATELY: &str = "Access granted immediately";
const MSG_ALREADY_GRANTED: &str = "Access already granted";
const MSG_SUBMITTED: &str = "Access request submitted. Awaiting approval.";
const MSG_APPROVED: &str = "Access approved";

const SUBJECT_NEW_REQUEST: &str = "New CPZ Atlas Access Request";
const SUBJECT_APPROVED: &str = "CPZ Atlas Access Approved";

/// Outcome of [`AccessControlService::submit_request`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moderator identity; nothing is stored
    GrantedImmediately { request_id: String },
    /// An unexpired grant already exists; nothing is stored
    AlreadyGranted,
    /// A new pending request was stored
    Submitted { request_id: String },
}

impl SubmitOutcome {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SubmitOutcome::GrantedImmediately { request_id }
            | SubmitOutcome::Submitted { request_id } => Some(request_id),
            SubmitOutcome::AlreadyGranted => None,
        }
    }
}

impl From<SubmitOutcome> for AccessResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::GrantedImmediately { request_id } => AccessResponse {
                message: MSG_GRANTED_IMMEDIATELY.to_string(),
                request_id: Some(request_id),
            },
            SubmitOutcome::AlreadyGranted => AccessResponse {
                message: MSG_ALREADY_GRANTED.to_string(),
                request_id: None,
            },
            SubmitOutcome::Submitted { request_id } => AccessResponse {
                message: MSG_SUBMITTED.to_string(),
                request_id: Some(request_id),
            },
        }
    }
}

#[derive(Default)]
struct AccessStore {
    requests: HashMap<String, AccessRequest>,
    grants: HashMap<String, ApprovalGrant>,
}

impl AccessStore {
    fn has_active_grant(&self, email: &str, now: DateTime<Utc>) -> bool {
        self.grants
            .get(email)
            .is_some_and(|grant| grant.is_active_at(now))
    }

    /// Draw request IDs until one is not already taken
    fn fresh_request_id(&self, email: &str, now: DateTime<Utc>) -> String {
        loop {
            let id = generate_request_id(email, now);
            if !self.requests.contains_key(&id) {
                return id;
            }
            debug!(request_id = %id, "Request ID collision, drawing again");
        }
    }
}

/// Request/approve/standing operations for a single moderator
pub struct AccessControlService {
    moderator_email: String,
    store: Mutex<AccessStore>,
    deps: ServerDeps,
}

impl AccessControlService {
    /// `moderator_email` is normalized here; callers may pass any casing
    pub fn new(moderator_email: &str, deps: ServerDeps) -> Self {
        Self {
            moderator_email: normalize_email(moderator_email),
            store: Mutex::new(AccessStore::default()),
            deps,
        }
    }

    pub fn moderator_email(&self) -> &str {
        &self.moderator_email
    }

    /// Case-insensitive comparison against the moderator identity
    pub fn is_moderator(&self, email: &str) -> bool {
        normalize_email(email) == self.moderator_email
    }

    /// Submit an access request for `email`.
    ///
    /// The moderator mail is spawned onto the current Tokio runtime, if any.
    pub fn submit_request(&self, email: &str) -> Result<SubmitOutcome, AccessError> {
        let email = parse_email(email)?;
        let now = self.deps.clock.now();

        if email == self.moderator_email {
            info!(email = %email, "Moderator access granted immediately");
            return Ok(SubmitOutcome::GrantedImmediately {
                request_id: generate_request_id(&email, now),
            });
        }

        let request_id = {
            let mut store = self.lock_store()?;

            if store.has_active_grant(&email, now) {
                info!(email = %email, "Access already granted, no request created");
                return Ok(SubmitOutcome::AlreadyGranted);
            }

            let request_id = store.fresh_request_id(&email, now);
            store.requests.insert(
                request_id.clone(),
                AccessRequest::pending(request_id.clone(), email.clone(), now),
            );
            request_id
        };

        info!(email = %email, request_id = %request_id, "Access request submitted");

        self.dispatch_notification(
            self.moderator_email.clone(),
            SUBJECT_NEW_REQUEST,
            format!("Access requested by: {}\nRequest ID: {}", email, request_id),
        );

        Ok(SubmitOutcome::Submitted { request_id })
    }

    /// Approve a pending request on behalf of `acting_email`.
    ///
    /// Checks, in order: moderator identity, request exists, request pending.
    pub fn approve_request(
        &self,
        request_id: &str,
        acting_email: &str,
    ) -> Result<ApprovalResponse, AccessError> {
        if !self.is_moderator(acting_email) {
            warn!(request_id = %request_id, "Approval attempted by non-moderator");
            return Err(AccessError::Unauthorized);
        }

        let now = self.deps.clock.now();

        let grant = {
            let mut store = self.lock_store()?;

            let request = store
                .requests
                .get_mut(request_id)
                .ok_or(AccessError::NotFound)?;

            if !request.is_pending() {
                return Err(AccessError::AlreadyProcessed);
            }

            request.status = AccessRequestStatus::Approved;
            let grant = ApprovalGrant::starting_at(request.email.clone(), now);
            store.grants.insert(grant.email.clone(), grant.clone());
            grant
        };

        info!(
            request_id = %request_id,
            email = %grant.email,
            expires_at = %grant.expires_at,
            "Access request approved"
        );

        self.dispatch_notification(
            grant.email,
            SUBJECT_APPROVED,
            "Your access request has been approved.".to_string(),
        );

        Ok(ApprovalResponse {
            message: MSG_APPROVED.to_string(),
        })
    }

    /// Whether `email` currently has access: moderator, or an unexpired grant
    pub fn check_standing(&self, email: &str) -> Result<bool, AccessError> {
        let email = parse_email(email)?;
        if email == self.moderator_email {
            return Ok(true);
        }

        let now = self.deps.clock.now();
        let has_access = self.lock_store()?.has_active_grant(&email, now);
        debug!(email = %email, has_access, "Standing checked");
        Ok(has_access)
    }

    /// Drop grants that are no longer active. Returns how many were removed.
    ///
    /// Expired grants never confer standing, so this does not change the
    /// outcome of any other operation.
    pub fn prune_expired_grants(&self) -> Result<usize, AccessError> {
        let now = self.deps.clock.now();
        let mut store = self.lock_store()?;
        let before = store.grants.len();
        store.grants.retain(|_, grant| grant.is_active_at(now));
        Ok(before - store.grants.len())
    }

    /// Snapshot of a stored request
    pub fn find_request(&self, request_id: &str) -> Result<Option<AccessRequest>, AccessError> {
        Ok(self.lock_store()?.requests.get(request_id).cloned())
    }

    /// Snapshot of the grant held by `email`, expired or not
    pub fn find_grant(&self, email: &str) -> Result<Option<ApprovalGrant>, AccessError> {
        let email = normalize_email(email);
        Ok(self.lock_store()?.grants.get(&email).cloned())
    }

    /// Number of stored requests, any status
    pub fn request_count(&self) -> Result<usize, AccessError> {
        Ok(self.lock_store()?.requests.len())
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, AccessStore>, AccessError> {
        self.store
            .lock()
            .map_err(|_| AccessError::Internal("access store lock poisoned".to_string()))
    }

    /// Fire-and-forget mail; failures are logged and dropped.
    ///
    /// Outside a Tokio runtime there is nothing to spawn onto, so the mail is
    /// dropped with a warning and the committed state change stands.
    fn dispatch_notification(&self, to: String, subject: &'static str, body: String) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(to = %to, subject = %subject, "No async runtime, notification dropped");
                return;
            }
        };

        let notifier = self.deps.notifier.clone();
        handle.spawn(async move {
            if let Err(e) = notifier.notify(&to, subject, &body).await {
                warn!(to = %to, subject = %subject, error = %e, "Notification failed");
            }
        });
    }
}
