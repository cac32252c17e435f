use crate::{
    model::rehearsal::AttendanceStatus,
    server::{
        data::rehearsal::RehearsalRepository,
        model::rehearsal::{
            CreateRehearsalParams, RehearsalFields, RehearsalFilter, SetAttendanceParams,
            UpdateRehearsalParams,
        },
    },
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_band;
mod reminders;
mod update;
mod upsert_attendance;

/// Builds rehearsal fields starting at `start` and lasting two hours.
fn fields(title: &str, start: DateTime<Utc>) -> RehearsalFields {
    RehearsalFields {
        title: title.to_string(),
        description: None,
        location: Some("Cavern Club".to_string()),
        start_time: start,
        end_time: start + Duration::hours(2),
        setlist_id: None,
    }
}
