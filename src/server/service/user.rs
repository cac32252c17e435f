use sea_orm::DatabaseConnection;

use crate::server::{
    data::{band_member::BandMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{UpdateProfileParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Merges the supplied profile fields into the user
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        let user_id = params.user_id;

        UserRepository::new(self.db)
            .update_profile(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Selects the band the user is working in, or clears the selection with `None`.
    ///
    /// Selecting a band requires membership.
    pub async fn set_current_band(
        &self,
        user_id: i32,
        band_id: Option<i32>,
    ) -> Result<User, AppError> {
        if let Some(band_id) = band_id {
            let role = BandMemberRepository::new(self.db)
                .get_role(band_id, user_id)
                .await?;
            if role.is_none() {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("cannot select band {} without membership", band_id),
                )
                .into());
            }
        }

        let repo = UserRepository::new(self.db);
        repo.set_current_band(user_id, band_id).await?;

        repo.find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Gets another user's profile as seen by `viewer_id`.
    ///
    /// Users only see themselves and users they share a band with; anyone else is
    /// reported as not found.
    pub async fn get_visible_profile(
        &self,
        viewer_id: i32,
        user_id: i32,
    ) -> Result<Option<User>, AppError> {
        if viewer_id != user_id
            && !BandMemberRepository::new(self.db)
                .share_band(viewer_id, user_id)
                .await?
        {
            return Ok(None);
        }

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }

    /// Moves a user off a band they can no longer use as their current band.
    ///
    /// If the user's current band is `removed_band_id`, it falls back to the first band
    /// they still belong to (earliest join, then lowest band ID) or to none. Other
    /// selections are left untouched.
    ///
    /// # Returns
    /// - `Ok(current_band_id)` - The user's current band after the fallback
    pub async fn fall_back_current_band(
        &self,
        user_id: i32,
        removed_band_id: i32,
    ) -> Result<Option<i32>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Ok(None);
        };
        if user.current_band_id != Some(removed_band_id) {
            return Ok(user.current_band_id);
        }

        let next = BandMemberRepository::new(self.db)
            .first_band_for_user(user_id)
            .await?;
        repo.set_current_band(user_id, next).await?;

        Ok(next)
    }
}
