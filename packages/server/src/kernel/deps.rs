//! Server dependencies (using traits for testability)
//!
//! Central container for the collaborators the access workflow talks to.
//! Production wiring uses [`ServerDeps::production`]; tests build one from
//! [`TestDependencies`](super::TestDependencies).

use std::sync::Arc;

use crate::kernel::{BaseClock, BaseNotifier, LogMailNotifier, SystemClock};

/// Server dependencies accessible to domain services
#[derive(Clone)]
pub struct ServerDeps {
    pub notifier: Arc<dyn BaseNotifier>,
    pub clock: Arc<dyn BaseClock>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(notifier: Arc<dyn BaseNotifier>, clock: Arc<dyn BaseClock>) -> Self {
        Self { notifier, clock }
    }

    /// Log-only mail and the system clock
    pub fn production() -> Self {
        Self::new(Arc::new(LogMailNotifier::new()), Arc::new(SystemClock))
    }
}
