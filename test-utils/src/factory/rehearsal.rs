//! Rehearsal factory for creating test rehearsal entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rehearsals.
///
/// Defaults to a two hour rehearsal starting one day from now, with no setlist
/// and no reminder sent.
pub struct RehearsalFactory<'a> {
    db: &'a DatabaseConnection,
    band_id: i32,
    created_by: i32,
    title: String,
    location: Option<String>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    setlist_id: Option<i32>,
    reminder_sent_at: Option<DateTime<Utc>>,
}

impl<'a> RehearsalFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, band_id: i32, created_by: i32) -> Self {
        let start_time = Utc::now() + Duration::days(1);
        Self {
            db,
            band_id,
            created_by,
            title: format!("Rehearsal {}", next_id()),
            location: None,
            start_time,
            end_time: start_time + Duration::hours(2),
            setlist_id: None,
            reminder_sent_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the start time and keeps the rehearsal two hours long.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = start_time + Duration::hours(2);
        self
    }

    pub fn setlist_id(mut self, setlist_id: i32) -> Self {
        self.setlist_id = Some(setlist_id);
        self
    }

    pub fn reminder_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.reminder_sent_at = Some(sent_at);
        self
    }

    pub async fn build(self) -> Result<entity::rehearsal::Model, DbErr> {
        let now = Utc::now();
        entity::rehearsal::ActiveModel {
            band_id: ActiveValue::Set(self.band_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            setlist_id: ActiveValue::Set(self.setlist_id),
            created_by: ActiveValue::Set(self.created_by),
            reminder_sent_at: ActiveValue::Set(self.reminder_sent_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rehearsal with default values.
pub async fn create_rehearsal(
    db: &DatabaseConnection,
    band_id: i32,
    created_by: i32,
) -> Result<entity::rehearsal::Model, DbErr> {
    RehearsalFactory::new(db, band_id, created_by).build().await
}
