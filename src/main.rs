mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::rehearsal_reminders,
    service::notification::NotificationHub,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::cors_layer(&config)?;

    let hub = NotificationHub::default();

    let mut scheduler =
        rehearsal_reminders::start_scheduler(db.clone(), hub.clone(), config.reminder_lead)
            .await?;

    let app = router::app(AppState::new(db, hub), session, cors);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(addr = %config.listen_addr(), "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = scheduler.shutdown().await {
        tracing::warn!(error = %e, "Reminder scheduler did not shut down cleanly");
    }

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("Received shutdown signal");
}
