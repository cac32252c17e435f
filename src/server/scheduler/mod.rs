//! Cron jobs that run alongside the HTTP server.

pub mod rehearsal_reminders;
