//! Band membership management.
//!
//! Enforces the membership invariants on top of the repository: a user is a member of a
//! band at most once, and a band never loses its last admin.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{band_member::BandMemberRepository, user::UserRepository},
    error::AppError,
    model::band::{AddMemberParams, BandMember, CreateMemberParams, UpdateMemberParams},
    service::user::UserService,
};

pub struct BandMemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandMemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a band's members ordered by join date
    pub async fn list(&self, band_id: i32) -> Result<Vec<BandMember>, AppError> {
        Ok(BandMemberRepository::new(self.db)
            .get_by_band(band_id)
            .await?)
    }

    /// Adds a registered user to a band by email.
    ///
    /// # Returns
    /// - `Ok(BandMember)` - The new membership
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AppError::Conflict)` - The user is already a member
    pub async fn add(&self, params: AddMemberParams) -> Result<BandMember, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&params.email)
            .await?
        else {
            return Err(AppError::NotFound(
                "No user is registered with that email".to_string(),
            ));
        };

        let repo = BandMemberRepository::new(self.db);
        if repo.get_role(params.band_id, user.id).await?.is_some() {
            return Err(AppError::Conflict(
                "User is already a member of this band".to_string(),
            ));
        }

        let member = repo
            .create(CreateMemberParams {
                band_id: params.band_id,
                user_id: user.id,
                role: params.role,
                instrument: params.instrument,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("User is already a member of this band".to_string())
                }
                _ => err.into(),
            })?;

        tracing::info!(
            band_id = member.band_id,
            user_id = member.user_id,
            role = %member.role,
            "Added band member"
        );

        Ok(member)
    }

    /// Changes a member's role and instrument.
    ///
    /// # Returns
    /// - `Ok(BandMember)` - The updated membership
    /// - `Err(AppError::NotFound)` - The user is not a member
    /// - `Err(AppError::Conflict)` - The change would demote the last admin
    pub async fn update(&self, params: UpdateMemberParams) -> Result<BandMember, AppError> {
        let (band_id, user_id) = (params.band_id, params.user_id);
        let repo = BandMemberRepository::new(self.db);

        match repo.update(params).await? {
            Some(member) => Ok(member),
            None => Err(self.refused_write(band_id, user_id).await?),
        }
    }

    /// Removes a member from a band along with their attendance answers.
    ///
    /// The removed user's current band falls back if it was this band.
    ///
    /// # Returns
    /// - `Ok(())` - Member removed
    /// - `Err(AppError::NotFound)` - The user is not a member
    /// - `Err(AppError::Conflict)` - The user is the band's last admin
    pub async fn remove(&self, band_id: i32, user_id: i32) -> Result<(), AppError> {
        if !BandMemberRepository::new(self.db)
            .delete(band_id, user_id)
            .await?
        {
            return Err(self.refused_write(band_id, user_id).await?);
        }

        UserService::new(self.db)
            .fall_back_current_band(user_id, band_id)
            .await?;

        tracing::info!(band_id, user_id, "Removed band member");

        Ok(())
    }

    /// Explains why a guarded membership write touched no row.
    async fn refused_write(&self, band_id: i32, user_id: i32) -> Result<AppError, AppError> {
        let role = BandMemberRepository::new(self.db)
            .get_role(band_id, user_id)
            .await?;

        Ok(match role {
            None => AppError::NotFound("Band member not found".to_string()),
            Some(_) => AppError::Conflict("A band must keep at least one admin".to_string()),
        })
    }
}
