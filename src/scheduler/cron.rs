use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::service::notice::NoticeService;

/// Daily at 03:00 UTC, unpublishing notices whose date has passed.
pub static NOTICE_SWEEP_CRON: &str = "0 0 3 * * *";

/// Initialize and start the cron job scheduler
pub async fn start_scheduler(db: &DatabaseConnection) -> Result<(), JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    let db_clone = db.clone();

    sched
        .add(Job::new_async(NOTICE_SWEEP_CRON, move |_, _| {
            let db = db_clone.clone();

            Box::pin(async move {
                let notice_service = NoticeService::new(&db);

                match notice_service.sweep_expired(Utc::now()).await {
                    Ok(count) => tracing::info!("Unpublished {} expired notice(s)", count),
                    Err(e) => tracing::error!("Error sweeping expired notices: {:?}", e),
                }
            })
        })?)
        .await?;

    sched.start().await?;
    Ok(())
}
