use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{rehearsal::RehearsalRepository, setlist::SetlistRepository},
    error::AppError,
    model::rehearsal::{
        Attendance, CreateRehearsalParams, Rehearsal, RehearsalFilter, SetAttendanceParams,
        UpdateRehearsalParams,
    },
};

pub struct RehearsalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RehearsalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a band's rehearsals in start order, optionally limited to a time window
    pub async fn list(&self, filter: RehearsalFilter) -> Result<Vec<Rehearsal>, AppError> {
        Ok(RehearsalRepository::new(self.db).get_by_band(filter).await?)
    }

    /// Gets a rehearsal with its attendance answers
    pub async fn get_by_id(&self, rehearsal_id: i32) -> Result<Option<Rehearsal>, AppError> {
        Ok(RehearsalRepository::new(self.db)
            .find_by_id(rehearsal_id)
            .await?)
    }

    /// Schedules a rehearsal.
    ///
    /// # Returns
    /// - `Ok(Rehearsal)` - The created rehearsal
    /// - `Err(AppError::BadRequest)` - The setlist belongs to another band or doesn't exist
    pub async fn create(&self, params: CreateRehearsalParams) -> Result<Rehearsal, AppError> {
        self.ensure_setlist_in_band(params.band_id, params.fields.setlist_id)
            .await?;

        let rehearsal = RehearsalRepository::new(self.db).create(params).await?;

        tracing::info!(
            rehearsal_id = rehearsal.id,
            band_id = rehearsal.band_id,
            "Scheduled rehearsal"
        );

        Ok(rehearsal)
    }

    /// Replaces a rehearsal of `band_id`.
    ///
    /// Returns None if the rehearsal doesn't exist.
    pub async fn update(
        &self,
        band_id: i32,
        params: UpdateRehearsalParams,
    ) -> Result<Option<Rehearsal>, AppError> {
        self.ensure_setlist_in_band(band_id, params.fields.setlist_id)
            .await?;

        Ok(RehearsalRepository::new(self.db).update(params).await?)
    }

    /// Deletes a rehearsal and its attendance
    /// Returns false if the rehearsal doesn't exist
    pub async fn delete(&self, rehearsal_id: i32) -> Result<bool, AppError> {
        Ok(RehearsalRepository::new(self.db)
            .delete(rehearsal_id)
            .await?)
    }

    /// Records the caller's own attendance answer
    pub async fn set_attendance(&self, params: SetAttendanceParams) -> Result<Attendance, AppError> {
        Ok(RehearsalRepository::new(self.db)
            .upsert_attendance(params)
            .await?)
    }

    /// Gets rehearsals whose reminder should go out at `now`
    pub async fn get_due_reminders(
        &self,
        now: DateTime<Utc>,
        lead: Duration,
    ) -> Result<Vec<Rehearsal>, AppError> {
        Ok(RehearsalRepository::new(self.db)
            .get_due_reminders(now, lead)
            .await?)
    }

    pub async fn mark_reminder_sent(
        &self,
        rehearsal_id: i32,
        sent_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        Ok(RehearsalRepository::new(self.db)
            .mark_reminder_sent(rehearsal_id, sent_at)
            .await?)
    }

    async fn ensure_setlist_in_band(
        &self,
        band_id: i32,
        setlist_id: Option<i32>,
    ) -> Result<(), AppError> {
        let Some(setlist_id) = setlist_id else {
            return Ok(());
        };

        let setlist = SetlistRepository::new(self.db)
            .find_by_id(setlist_id)
            .await?;

        match setlist {
            Some(setlist) if setlist.band_id == band_id => Ok(()),
            _ => Err(AppError::BadRequest(
                "Setlist does not belong to this band".to_string(),
            )),
        }
    }
}
