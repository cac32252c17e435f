//! Setlist factory for creating setlists and their songs.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating setlists.
///
/// Songs added with `song()` are inserted in call order with positions `0..n`.
pub struct SetlistFactory<'a> {
    db: &'a DatabaseConnection,
    band_id: i32,
    created_by: i32,
    name: String,
    songs: Vec<(String, Option<i32>)>,
}

impl<'a> SetlistFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, band_id: i32, created_by: i32) -> Self {
        Self {
            db,
            band_id,
            created_by,
            name: format!("Setlist {}", next_id()),
            songs: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a song with an optional duration in seconds.
    pub fn song(mut self, title: impl Into<String>, duration_seconds: Option<i32>) -> Self {
        self.songs.push((title.into(), duration_seconds));
        self
    }

    pub async fn build(self) -> Result<entity::setlist::Model, DbErr> {
        let now = Utc::now();
        let setlist = entity::setlist::ActiveModel {
            band_id: ActiveValue::Set(self.band_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, (title, duration_seconds)) in self.songs.into_iter().enumerate() {
            entity::setlist_song::ActiveModel {
                setlist_id: ActiveValue::Set(setlist.id),
                position: ActiveValue::Set(position as i32),
                title: ActiveValue::Set(title),
                artist: ActiveValue::Set(None),
                duration_seconds: ActiveValue::Set(duration_seconds),
                song_key: ActiveValue::Set(None),
                notes: ActiveValue::Set(None),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(setlist)
    }
}

/// Creates an empty setlist with default values.
pub async fn create_setlist(
    db: &DatabaseConnection,
    band_id: i32,
    created_by: i32,
) -> Result<entity::setlist::Model, DbErr> {
    SetlistFactory::new(db, band_id, created_by).build().await
}
