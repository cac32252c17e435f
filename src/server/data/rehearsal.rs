//! Rehearsal data repository.
//!
//! Provides `RehearsalRepository` for rehearsal CRUD, attendance upserts and the
//! reminder bookkeeping used by the scheduler. Rehearsals are returned with their
//! attendance answers loaded in a single batched query.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::rehearsal::{
    Attendance, CreateRehearsalParams, Rehearsal, RehearsalFilter, SetAttendanceParams,
    UpdateRehearsalParams,
};

/// Repository providing database operations for rehearsals and attendance.
pub struct RehearsalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RehearsalRepository<'a> {
    /// Creates a new RehearsalRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a rehearsal.
    ///
    /// # Returns
    /// - `Ok(Rehearsal)` - The created rehearsal without attendance
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRehearsalParams) -> Result<Rehearsal, DbErr> {
        let now = Utc::now();
        let fields = params.fields;

        let entity = entity::rehearsal::ActiveModel {
            band_id: ActiveValue::Set(params.band_id),
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            location: ActiveValue::Set(fields.location),
            start_time: ActiveValue::Set(fields.start_time),
            end_time: ActiveValue::Set(fields.end_time),
            setlist_id: ActiveValue::Set(fields.setlist_id),
            created_by: ActiveValue::Set(params.created_by),
            reminder_sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rehearsal::from_entity(entity, Vec::new()))
    }

    /// Finds a rehearsal with its attendance.
    ///
    /// # Returns
    /// - `Ok(Some(Rehearsal))` - Rehearsal found
    /// - `Ok(None)` - No rehearsal with that ID
    /// - `Err(DbErr)` - Database error or corrupt attendance row
    pub async fn find_by_id(&self, rehearsal_id: i32) -> Result<Option<Rehearsal>, DbErr> {
        let Some(entity) = entity::prelude::Rehearsal::find_by_id(rehearsal_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut attendance = self.get_attendance(&[entity.id]).await?;
        let answers = attendance.remove(&entity.id).unwrap_or_default();

        Ok(Some(Rehearsal::from_entity(entity, answers)))
    }

    /// Gets a band's rehearsals ordered by start time.
    ///
    /// Applies the optional `[from, to)` window to the start time.
    ///
    /// # Returns
    /// - `Ok(Vec<Rehearsal>)` - Matching rehearsals with attendance
    /// - `Err(DbErr)` - Database error or corrupt attendance row
    pub async fn get_by_band(&self, filter: RehearsalFilter) -> Result<Vec<Rehearsal>, DbErr> {
        let mut query = entity::prelude::Rehearsal::find()
            .filter(entity::rehearsal::Column::BandId.eq(filter.band_id));
        if let Some(from) = filter.from {
            query = query.filter(entity::rehearsal::Column::StartTime.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::rehearsal::Column::StartTime.lt(to));
        }

        let entities = query
            .order_by_asc(entity::rehearsal::Column::StartTime)
            .order_by_asc(entity::rehearsal::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|r| r.id).collect();
        let mut attendance = self.get_attendance(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let answers = attendance.remove(&entity.id).unwrap_or_default();
                Rehearsal::from_entity(entity, answers)
            })
            .collect())
    }

    /// Loads attendance answers for the given rehearsals, grouped by rehearsal ID.
    async fn get_attendance(
        &self,
        rehearsal_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Attendance>>, DbErr> {
        if rehearsal_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::RehearsalAttendance::find()
            .filter(
                entity::rehearsal_attendance::Column::RehearsalId.is_in(rehearsal_ids.to_vec()),
            )
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::rehearsal_attendance::Column::UserId)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<Attendance>> = HashMap::new();
        for (row, user) in rows {
            let attendance = Attendance::from_entity(row, user)?;
            grouped
                .entry(attendance.rehearsal_id)
                .or_default()
                .push(attendance);
        }

        Ok(grouped)
    }

    /// Replaces a rehearsal's editable fields.
    ///
    /// Moving the start time clears `reminder_sent_at` so the reminder goes out again
    /// for the new time.
    ///
    /// # Returns
    /// - `Ok(Some(Rehearsal))` - The updated rehearsal with attendance
    /// - `Ok(None)` - No rehearsal with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateRehearsalParams) -> Result<Option<Rehearsal>, DbErr> {
        let Some(entity) = entity::prelude::Rehearsal::find_by_id(params.rehearsal_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let fields = params.fields;
        let start_moved = entity.start_time != fields.start_time;

        let mut active = entity.into_active_model();
        active.title = ActiveValue::Set(fields.title);
        active.description = ActiveValue::Set(fields.description);
        active.location = ActiveValue::Set(fields.location);
        active.start_time = ActiveValue::Set(fields.start_time);
        active.end_time = ActiveValue::Set(fields.end_time);
        active.setlist_id = ActiveValue::Set(fields.setlist_id);
        if start_moved {
            active.reminder_sent_at = ActiveValue::Set(None);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(params.rehearsal_id).await
    }

    /// Deletes a rehearsal and its attendance answers.
    ///
    /// # Returns
    /// - `Ok(true)` - Rehearsal deleted
    /// - `Ok(false)` - No rehearsal with that ID
    /// - `Err(DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, rehearsal_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::RehearsalAttendance::delete_many()
            .filter(entity::rehearsal_attendance::Column::RehearsalId.eq(rehearsal_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Rehearsal::delete_by_id(rehearsal_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Creates or replaces a user's attendance answer for a rehearsal.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The stored answer
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_attendance(&self, params: SetAttendanceParams) -> Result<Attendance, DbErr> {
        let existing = entity::prelude::RehearsalAttendance::find()
            .filter(entity::rehearsal_attendance::Column::RehearsalId.eq(params.rehearsal_id))
            .filter(entity::rehearsal_attendance::Column::UserId.eq(params.user_id))
            .one(self.db)
            .await?;

        let now = Utc::now();
        let row = match existing {
            Some(row) => {
                let mut active = row.into_active_model();
                active.status = ActiveValue::Set(params.status.as_str().to_string());
                active.note = ActiveValue::Set(params.note);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::rehearsal_attendance::ActiveModel {
                    rehearsal_id: ActiveValue::Set(params.rehearsal_id),
                    user_id: ActiveValue::Set(params.user_id),
                    status: ActiveValue::Set(params.status.as_str().to_string()),
                    note: ActiveValue::Set(params.note),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        let user = entity::prelude::User::find_by_id(row.user_id)
            .one(self.db)
            .await?;

        Attendance::from_entity(row, user)
    }

    /// Gets rehearsals whose reminder is due at `now`.
    ///
    /// A reminder is due when it has not been sent yet, the rehearsal has not started,
    /// and the rehearsal starts within `lead` of `now`.
    pub async fn get_due_reminders(
        &self,
        now: DateTime<Utc>,
        lead: Duration,
    ) -> Result<Vec<Rehearsal>, DbErr> {
        let horizon = now
            .checked_add_signed(lead)
            .ok_or_else(|| DbErr::Custom(format!("Reminder lead {lead} overflows the clock")))?;

        let entities = entity::prelude::Rehearsal::find()
            .filter(entity::rehearsal::Column::ReminderSentAt.is_null())
            .filter(entity::rehearsal::Column::StartTime.gt(now))
            .filter(entity::rehearsal::Column::StartTime.lte(horizon))
            .order_by_asc(entity::rehearsal::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| Rehearsal::from_entity(entity, Vec::new()))
            .collect())
    }

    /// Records that the reminder for a rehearsal went out at `sent_at`.
    pub async fn mark_reminder_sent(
        &self,
        rehearsal_id: i32,
        sent_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Rehearsal::update_many()
            .filter(entity::rehearsal::Column::Id.eq(rehearsal_id))
            .col_expr(
                entity::rehearsal::Column::ReminderSentAt,
                Expr::value(Some(sent_at)),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
