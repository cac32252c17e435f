use sea_orm::DatabaseConnection;

use crate::server::{
    data::setlist::SetlistRepository,
    error::AppError,
    model::setlist::{CreateSetlistParams, Setlist, UpdateSetlistParams},
};

pub struct SetlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a band's setlists ordered by name
    pub async fn list(&self, band_id: i32) -> Result<Vec<Setlist>, AppError> {
        Ok(SetlistRepository::new(self.db).get_by_band(band_id).await?)
    }

    pub async fn get_by_id(&self, setlist_id: i32) -> Result<Option<Setlist>, AppError> {
        Ok(SetlistRepository::new(self.db)
            .find_by_id(setlist_id)
            .await?)
    }

    /// Creates a setlist with songs numbered in the given order
    pub async fn create(&self, params: CreateSetlistParams) -> Result<Setlist, AppError> {
        let setlist = SetlistRepository::new(self.db).create(params).await?;

        tracing::info!(
            setlist_id = setlist.id,
            band_id = setlist.band_id,
            songs = setlist.songs.len(),
            "Created setlist"
        );

        Ok(setlist)
    }

    /// Replaces a setlist and its songs
    /// Returns None if the setlist doesn't exist
    pub async fn update(&self, params: UpdateSetlistParams) -> Result<Option<Setlist>, AppError> {
        Ok(SetlistRepository::new(self.db).update(params).await?)
    }

    /// Deletes a setlist, detaching it from any rehearsal
    /// Returns false if the setlist doesn't exist
    pub async fn delete(&self, setlist_id: i32) -> Result<bool, AppError> {
        Ok(SetlistRepository::new(self.db).delete(setlist_id).await?)
    }
}
