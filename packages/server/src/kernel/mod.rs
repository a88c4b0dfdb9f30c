//! Kernel module - server infrastructure and dependencies.

pub mod clock;
pub mod deps;
pub mod notifier;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use clock::SystemClock;
pub use deps::ServerDeps;
pub use notifier::LogMailNotifier;
pub use scheduled_tasks::start_scheduler;
pub use test_dependencies::{MockClock, MockNotifier, SentNotification, TestDependencies};
pub use traits::*;
