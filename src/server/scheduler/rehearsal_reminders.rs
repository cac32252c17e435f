use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    model::notification::BandEventDto,
    server::{
        error::AppError, service::notification::NotificationHub,
        service::rehearsal::RehearsalService,
    },
};

/// Starts the rehearsal reminder scheduler
///
/// Runs every minute and publishes a `rehearsal_reminder` notification for each
/// rehearsal starting within `lead` that hasn't been reminded yet.
///
/// # Arguments
/// - `db`: Database connection
/// - `hub`: Notification hub shared with the HTTP handlers
/// - `lead`: How long before the start the reminder goes out
pub async fn start_scheduler(
    db: DatabaseConnection,
    hub: NotificationHub,
    lead: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let hub = hub.clone();

        Box::pin(async move {
            if let Err(e) = process_reminders(&db, &hub, Utc::now(), lead).await {
                tracing::error!("Error processing rehearsal reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(lead_minutes = lead.num_minutes(), "Rehearsal reminder scheduler started");

    Ok(scheduler)
}

/// Sends the reminders due at `now`.
///
/// Each rehearsal is marked as reminded before its notification is published, so a
/// rehearsal is never announced twice. A rehearsal that fails to be marked is logged
/// and skipped without stopping the others.
///
/// # Returns
/// - `Ok(count)` - Number of reminders sent
/// - `Err(AppError)` - The due rehearsals could not be loaded
pub async fn process_reminders(
    db: &DatabaseConnection,
    hub: &NotificationHub,
    now: DateTime<Utc>,
    lead: Duration,
) -> Result<usize, AppError> {
    let service = RehearsalService::new(db);
    let due = service.get_due_reminders(now, lead).await?;

    let mut sent = 0;
    for rehearsal in due {
        if let Err(e) = service.mark_reminder_sent(rehearsal.id, now).await {
            tracing::error!(
                rehearsal_id = rehearsal.id,
                error = %e,
                "Failed to mark rehearsal reminder as sent"
            );
            continue;
        }

        let reached = hub.publish(
            rehearsal.band_id,
            BandEventDto::RehearsalReminder {
                rehearsal_id: rehearsal.id,
                title: rehearsal.title,
                start_time: rehearsal.start_time,
                location: rehearsal.location,
            },
        );

        tracing::info!(
            rehearsal_id = rehearsal.id,
            band_id = rehearsal.band_id,
            subscribers = reached,
            "Sent rehearsal reminder"
        );
        sent += 1;
    }

    Ok(sent)
}
