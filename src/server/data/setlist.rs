//! Setlist data repository.
//!
//! Provides `SetlistRepository` for setlists and their songs. Songs are always written
//! as a whole list, so positions stay contiguous from zero.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::model::setlist::{CreateSetlistParams, Setlist, SongParams, UpdateSetlistParams};

/// Repository providing database operations for setlists and songs.
pub struct SetlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetlistRepository<'a> {
    /// Creates a new SetlistRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a setlist with its songs in one transaction.
    ///
    /// # Returns
    /// - `Ok(Setlist)` - The created setlist with songs at positions `0..n`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateSetlistParams) -> Result<Setlist, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let setlist = entity::setlist::ActiveModel {
            band_id: ActiveValue::Set(params.band_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let songs = insert_songs(&txn, setlist.id, params.songs).await?;

        txn.commit().await?;

        Ok(Setlist::from_entity(setlist, songs))
    }

    /// Finds a setlist with its songs.
    ///
    /// # Returns
    /// - `Ok(Some(Setlist))` - Setlist found
    /// - `Ok(None)` - No setlist with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, setlist_id: i32) -> Result<Option<Setlist>, DbErr> {
        let Some(setlist) = entity::prelude::Setlist::find_by_id(setlist_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let songs = entity::prelude::SetlistSong::find()
            .filter(entity::setlist_song::Column::SetlistId.eq(setlist.id))
            .order_by_asc(entity::setlist_song::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(Setlist::from_entity(setlist, songs)))
    }

    /// Gets a band's setlists ordered by name, each with its songs.
    pub async fn get_by_band(&self, band_id: i32) -> Result<Vec<Setlist>, DbErr> {
        let setlists = entity::prelude::Setlist::find()
            .filter(entity::setlist::Column::BandId.eq(band_id))
            .order_by_asc(entity::setlist::Column::Name)
            .order_by_asc(entity::setlist::Column::Id)
            .all(self.db)
            .await?;

        if setlists.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = setlists.iter().map(|s| s.id).collect();
        let songs = entity::prelude::SetlistSong::find()
            .filter(entity::setlist_song::Column::SetlistId.is_in(ids))
            .order_by_asc(entity::setlist_song::Column::Position)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::setlist_song::Model>> = HashMap::new();
        for song in songs {
            grouped.entry(song.setlist_id).or_default().push(song);
        }

        Ok(setlists
            .into_iter()
            .map(|setlist| {
                let songs = grouped.remove(&setlist.id).unwrap_or_default();
                Setlist::from_entity(setlist, songs)
            })
            .collect())
    }

    /// Replaces a setlist's name, description and songs in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Setlist))` - The updated setlist, songs renumbered `0..n`
    /// - `Ok(None)` - No setlist with that ID
    /// - `Err(DbErr)` - Database error; nothing is changed
    pub async fn update(&self, params: UpdateSetlistParams) -> Result<Option<Setlist>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(setlist) = entity::prelude::Setlist::find_by_id(params.setlist_id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active = setlist.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.updated_at = ActiveValue::Set(Utc::now());
        let setlist = active.update(&txn).await?;

        entity::prelude::SetlistSong::delete_many()
            .filter(entity::setlist_song::Column::SetlistId.eq(setlist.id))
            .exec(&txn)
            .await?;
        let songs = insert_songs(&txn, setlist.id, params.songs).await?;

        txn.commit().await?;

        Ok(Some(Setlist::from_entity(setlist, songs)))
    }

    /// Deletes a setlist and its songs.
    ///
    /// Rehearsals that referenced the setlist keep existing with `setlist_id` cleared.
    ///
    /// # Returns
    /// - `Ok(true)` - Setlist deleted
    /// - `Ok(false)` - No setlist with that ID
    /// - `Err(DbErr)` - Database error; nothing is changed
    pub async fn delete(&self, setlist_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Rehearsal::update_many()
            .filter(entity::rehearsal::Column::SetlistId.eq(setlist_id))
            .col_expr(
                entity::rehearsal::Column::SetlistId,
                Expr::value(Option::<i32>::None),
            )
            .exec(&txn)
            .await?;

        entity::prelude::SetlistSong::delete_many()
            .filter(entity::setlist_song::Column::SetlistId.eq(setlist_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Setlist::delete_by_id(setlist_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

/// Inserts songs for a setlist at positions `0..n` in list order.
async fn insert_songs<C: ConnectionTrait>(
    db: &C,
    setlist_id: i32,
    songs: Vec<SongParams>,
) -> Result<Vec<entity::setlist_song::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(songs.len());

    for (position, song) in songs.into_iter().enumerate() {
        let model = entity::setlist_song::ActiveModel {
            setlist_id: ActiveValue::Set(setlist_id),
            position: ActiveValue::Set(position as i32),
            title: ActiveValue::Set(song.title),
            artist: ActiveValue::Set(song.artist),
            duration_seconds: ActiveValue::Set(song.duration_seconds),
            song_key: ActiveValue::Set(song.song_key),
            notes: ActiveValue::Set(song.notes),
            ..Default::default()
        }
        .insert(db)
        .await?;
        inserted.push(model);
    }

    Ok(inserted)
}
