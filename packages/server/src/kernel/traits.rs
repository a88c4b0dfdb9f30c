// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The access workflow decides *when* to notify and *what* time it is;
// these traits only carry the message or read the clock.
//
// Naming convention: Base* for trait names (e.g., BaseNotifier, BaseClock)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

// =============================================================================
// Notifier Trait (Infrastructure - outbound email)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver a plain-text message to an email address
    async fn notify(&self, to_email: &str, subject: &str, body: &str) -> Result<()>;
}

// =============================================================================
// Clock Trait (Infrastructure)
// =============================================================================

pub trait BaseClock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}
