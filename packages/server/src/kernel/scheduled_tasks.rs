//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! - Grant sweep: drops expired approval grants so the grant map does not
//!   grow without bound. Request records are never swept (audit trail).
//!
//! ```text
//! Scheduler (GRANT_PRUNE_SCHEDULE, hourly by default)
//!     │
//!     └─► AccessControlService::prune_expired_grants()
//! ```

use std::sync::Arc;

use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::domains::access::AccessControlService;

/// Start all scheduled tasks
pub async fn start_scheduler(
    access: Arc<AccessControlService>,
    grant_prune_schedule: &str,
) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let prune_job = Job::new_async(grant_prune_schedule, move |_uuid, _lock| {
        let access = access.clone();
        Box::pin(async move {
            if let Err(e) = run_grant_sweep(&access) {
                tracing::error!("Grant sweep task failed: {}", e);
            }
        })
    })?;

    scheduler.add(prune_job).await?;
    scheduler.start().await?;

    tracing::info!(
        schedule = %grant_prune_schedule,
        "Scheduled tasks started (expired grant sweep)"
    );
    Ok(scheduler)
}

/// Run the expired grant sweep once
fn run_grant_sweep(access: &AccessControlService) -> Result<()> {
    let removed = access.prune_expired_grants()?;
    tracing::info!("Grant sweep complete: removed {} expired grants", removed);
    Ok(())
}
