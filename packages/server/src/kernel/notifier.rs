//! Mock mail transport.
//!
//! There is no SMTP integration; messages are written to the log so operators
//! can see what would have been sent. Swap in a real [`BaseNotifier`] to
//! deliver mail.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use super::BaseNotifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailNotifier;

impl LogMailNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BaseNotifier for LogMailNotifier {
    async fn notify(&self, to_email: &str, subject: &str, body: &str) -> Result<()> {
        info!(to = %to_email, subject = %subject, body = %body, "Mock email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_never_fails() {
        let notifier = LogMailNotifier::new();
        notifier
            .notify("someone@example.com", "Subject", "Body")
            .await
            .unwrap();
    }
}
