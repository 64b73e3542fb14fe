use chrono::{DateTime, Duration as ChronoDuration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::invitation::InvitationRepository, error::AppError};

/// Retention rules applied by each cull run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullPolicy {
    /// Invitations older than this are deleted whether or not they were kept.
    pub max_age: ChronoDuration,
    /// Invitations never marked kept are deleted once older than this.
    pub unkept_max_age: ChronoDuration,
}

impl Default for CullPolicy {
    fn default() -> Self {
        Self {
            max_age: ChronoDuration::days(7),
            unkept_max_age: ChronoDuration::minutes(30),
        }
    }
}

/// Deletes invitations that fall outside the retention policy as of `now`.
///
/// # Arguments
/// - `db` - Database connection
/// - `policy` - Hard and unkept retention windows
/// - `now` - Instant ages are measured from
///
/// # Returns
/// - `Ok(u64)` - Number of invitations deleted
/// - `Err(DbErr)` - The delete failed; nothing is retried until the next run
pub async fn cull_invitations(
    db: &DatabaseConnection,
    policy: CullPolicy,
    now: DateTime<Utc>,
) -> Result<u64, DbErr> {
    InvitationRepository::new(db)
        .delete_stale(now - policy.max_age, now - policy.unkept_max_age)
        .await
}

/// Runs one cull and logs the outcome. Failures are logged and swallowed.
async fn run_cull(db: &DatabaseConnection, policy: CullPolicy) {
    match cull_invitations(db, policy, Utc::now()).await {
        Ok(deleted) => tracing::info!(deleted, "Culled stale invitations"),
        Err(e) => tracing::error!("Error culling invitations: {}", e),
    }
}

/// Owns the scheduler running the periodic invitation cull.
///
/// The scheduler runs independently of request handling and must be shut down
/// explicitly when the server stops.
pub struct InvitationCuller {
    scheduler: JobScheduler,
}

impl InvitationCuller {
    /// Starts culling on a fixed interval with the default policy.
    ///
    /// The first run happens one interval after start.
    ///
    /// # Arguments
    /// - `db` - Database connection, cloned into the job
    /// - `interval` - Time between runs
    ///
    /// # Returns
    /// - `Ok(InvitationCuller)` - Scheduler running
    /// - `Err(AppError::SchedulerErr)` - Scheduler failed to start
    pub async fn start(db: DatabaseConnection, interval: Duration) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;
        let policy = CullPolicy::default();

        let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let db = db.clone();

            Box::pin(async move {
                run_cull(&db, policy).await;
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        tracing::info!(
            interval_secs = interval.as_secs(),
            "Invitation cull scheduler started"
        );

        Ok(Self { scheduler })
    }

    /// Stops the scheduler; no further culls run afterwards.
    pub async fn shutdown(mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;

        tracing::info!("Invitation cull scheduler stopped");

        Ok(())
    }
}
