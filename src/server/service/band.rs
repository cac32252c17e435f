use sea_orm::DatabaseConnection;

use crate::server::{
    data::{band::BandRepository, band_member::BandMemberRepository, user::UserRepository},
    error::AppError,
    model::band::{Band, BandSummary, CreateBandParams, UpdateBandParams},
    service::user::UserService,
};

pub struct BandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the bands a user belongs to, ordered by name
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<BandSummary>, AppError> {
        Ok(BandRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Creates a band with the creator as its admin.
    ///
    /// The new band becomes the creator's current band if they have none selected.
    pub async fn create(&self, params: CreateBandParams) -> Result<Band, AppError> {
        let creator_id = params.created_by;
        let band = BandRepository::new(self.db).create(params).await?;

        let user_repo = UserRepository::new(self.db);
        let creator = user_repo.find_by_id(creator_id).await?;
        if creator.is_some_and(|user| user.current_band_id.is_none()) {
            user_repo.set_current_band(creator_id, Some(band.id)).await?;
        }

        tracing::info!(band_id = band.id, user_id = creator_id, "Created band");

        self.get_by_id(band.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Band not found after creation".to_string()))
    }

    /// Gets a band with its members ordered by join date
    pub async fn get_by_id(&self, band_id: i32) -> Result<Option<Band>, AppError> {
        let Some(band) = BandRepository::new(self.db).find_by_id(band_id).await? else {
            return Ok(None);
        };

        let members = BandMemberRepository::new(self.db)
            .get_by_band(band_id)
            .await?;

        Ok(Some(Band::from_entity(band, members)))
    }

    /// Replaces a band's name, description and logo
    /// Returns None if the band doesn't exist
    pub async fn update(&self, params: UpdateBandParams) -> Result<Option<Band>, AppError> {
        let band_id = params.band_id;

        if BandRepository::new(self.db).update(params).await?.is_none() {
            return Ok(None);
        }

        self.get_by_id(band_id).await
    }

    /// Deletes a band with all of its members, rehearsals and setlists.
    ///
    /// Users who had the band selected fall back to another band of theirs.
    /// Returns false if the band doesn't exist.
    pub async fn delete(&self, band_id: i32) -> Result<bool, AppError> {
        let affected_users = UserRepository::new(self.db)
            .get_ids_by_current_band(band_id)
            .await?;

        if !BandRepository::new(self.db).delete(band_id).await? {
            return Ok(false);
        }

        let user_service = UserService::new(self.db);
        for user_id in affected_users {
            user_service.fall_back_current_band(user_id, band_id).await?;
        }

        tracing::info!(band_id, "Deleted band");

        Ok(true)
    }
}
