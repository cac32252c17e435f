//! Band data repository for database operations.
//!
//! This module provides the `BandRepository` for managing bands. Band creation also
//! inserts the creator's admin membership, and band deletion removes every row that
//! belongs to the band in a single transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    model::band::MemberRole,
    server::model::band::{BandSummary, CreateBandParams, UpdateBandParams},
};

/// Repository providing database operations for bands.
pub struct BandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandRepository<'a> {
    /// Creates a new BandRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a band and adds its creator as an admin member.
    ///
    /// Both rows are inserted in one transaction so a band never exists without an
    /// admin.
    ///
    /// # Returns
    /// - `Ok(entity::band::Model)` - The created band
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBandParams) -> Result<entity::band::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let band = entity::band::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            logo_url: ActiveValue::Set(params.logo_url),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::band_member::ActiveModel {
            band_id: ActiveValue::Set(band.id),
            user_id: ActiveValue::Set(params.created_by),
            role: ActiveValue::Set(MemberRole::Admin.as_str().to_string()),
            instrument: ActiveValue::Set(params.instrument),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(band)
    }

    /// Finds a band by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Band found
    /// - `Ok(None)` - No band with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, band_id: i32) -> Result<Option<entity::band::Model>, DbErr> {
        entity::prelude::Band::find_by_id(band_id)
            .one(self.db)
            .await
    }

    /// Gets every band the user belongs to, ordered by band name.
    ///
    /// Each summary carries the user's role in that band and the band's member count.
    ///
    /// # Returns
    /// - `Ok(Vec<BandSummary>)` - Bands of the user (empty if none)
    /// - `Err(DbErr)` - Database error or an unknown stored role
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<BandSummary>, DbErr> {
        let rows = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Band)
            .order_by_asc(entity::band::Column::Name)
            .order_by_asc(entity::band::Column::Id)
            .all(self.db)
            .await?;

        let band_ids: Vec<i32> = rows.iter().map(|(member, _)| member.band_id).collect();
        let counts = self.count_members(&band_ids).await?;

        rows.into_iter()
            .filter_map(|(membership, band)| band.map(|band| (membership, band)))
            .map(|(membership, band)| {
                let member_count = counts.get(&band.id).copied().unwrap_or(0);
                BandSummary::from_entity(band, &membership, member_count)
            })
            .collect()
    }

    /// Counts members per band for the given band IDs.
    async fn count_members(&self, band_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if band_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let member_band_ids: Vec<i32> = entity::prelude::BandMember::find()
            .select_only()
            .column(entity::band_member::Column::BandId)
            .filter(entity::band_member::Column::BandId.is_in(band_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for band_id in member_band_ids {
            *counts.entry(band_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Replaces the band's name, description and logo.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated band
    /// - `Ok(None)` - No band with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateBandParams,
    ) -> Result<Option<entity::band::Model>, DbErr> {
        let Some(band) = entity::prelude::Band::find_by_id(params.band_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = band.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.logo_url = ActiveValue::Set(params.logo_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a band together with everything that belongs to it.
    ///
    /// Removes attendance, rehearsals, songs, setlists and memberships before the band
    /// itself, all within one transaction. Users' current band selections are left to
    /// the caller.
    ///
    /// # Returns
    /// - `Ok(true)` - Band deleted
    /// - `Ok(false)` - No band with that ID
    /// - `Err(DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, band_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let rehearsal_ids: Vec<i32> = entity::prelude::Rehearsal::find()
            .select_only()
            .column(entity::rehearsal::Column::Id)
            .filter(entity::rehearsal::Column::BandId.eq(band_id))
            .into_tuple()
            .all(&txn)
            .await?;

        entity::prelude::RehearsalAttendance::delete_many()
            .filter(entity::rehearsal_attendance::Column::RehearsalId.is_in(rehearsal_ids))
            .exec(&txn)
            .await?;

        entity::prelude::Rehearsal::delete_many()
            .filter(entity::rehearsal::Column::BandId.eq(band_id))
            .exec(&txn)
            .await?;

        let setlist_ids: Vec<i32> = entity::prelude::Setlist::find()
            .select_only()
            .column(entity::setlist::Column::Id)
            .filter(entity::setlist::Column::BandId.eq(band_id))
            .into_tuple()
            .all(&txn)
            .await?;

        entity::prelude::SetlistSong::delete_many()
            .filter(entity::setlist_song::Column::SetlistId.is_in(setlist_ids))
            .exec(&txn)
            .await?;

        entity::prelude::Setlist::delete_many()
            .filter(entity::setlist::Column::BandId.eq(band_id))
            .exec(&txn)
            .await?;

        entity::prelude::BandMember::delete_many()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Band::delete_by_id(band_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
