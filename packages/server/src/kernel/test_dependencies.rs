// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use super::{BaseClock, BaseNotifier, ServerDeps};

// =============================================================================
// Mock Notifier
// =============================================================================

/// A message captured by [`MockNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub struct MockNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Notifier that records every call and then returns an error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Get all notifications that were attempted
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    /// Check if a notification was sent to the given address
    pub fn was_sent_to(&self, to: &str) -> bool {
        self.sent.lock().unwrap().iter().any(|n| n.to == to)
    }

    /// Yield to the runtime until `count` notifications were attempted.
    ///
    /// Notifications are spawned, so callers need to give those tasks a
    /// chance to run before asserting on them.
    pub async fn wait_for(&self, count: usize) -> Vec<SentNotification> {
        for _ in 0..100 {
            if self.sent.lock().unwrap().len() >= count {
                break;
            }
            tokio::task::yield_now().await;
        }
        self.sent()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn notify(&self, to_email: &str, subject: &str, body: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentNotification {
            to: to_email.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        if self.fail {
            anyhow::bail!("mock mail transport is down");
        }
        Ok(())
    }
}

// =============================================================================
// Mock Clock
// =============================================================================

/// Manually driven clock; starts at a fixed instant
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseClock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub notifier: Arc<MockNotifier>,
    pub clock: Arc<MockClock>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            notifier: Arc::new(MockNotifier::new()),
            clock: Arc::new(MockClock::new()),
        }
    }

    /// Set a mock notifier
    pub fn mock_notifier(mut self, notifier: MockNotifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Set a mock clock
    pub fn mock_clock(mut self, clock: MockClock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build ServerDeps sharing these mocks
    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(self.notifier, self.clock)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
