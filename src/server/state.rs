//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Both fields are cheap to clone: the connection is a pool
//! and the hub wraps a broadcast sender.

use sea_orm::DatabaseConnection;

use crate::server::service::notification::NotificationHub;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by every request.
    pub db: DatabaseConnection,

    /// Fan-out for band notifications, shared with the reminder scheduler.
    pub hub: NotificationHub,
}

impl AppState {
    pub fn new(db: DatabaseConnection, hub: NotificationHub) -> Self {
        Self { db, hub }
    }
}
