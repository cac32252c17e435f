//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. It handles
//! account creation, lookups by ID and email, profile updates and the user's current
//! band selection, converting entity models into domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The email is expected to be normalized already. Uniqueness is enforced by the
    /// database; callers check `email_exists` first to return a friendly conflict.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            profile_image_url: ActiveValue::Set(None),
            current_band_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalized email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether an account with the given normalized email exists.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Merges the supplied profile fields into the stored user.
    ///
    /// Fields that are `None` in the parameters keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(params.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(profile_image_url) = params.profile_image_url {
            active.profile_image_url = ActiveValue::Set(profile_image_url);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Sets or clears the user's current band.
    ///
    /// Membership is not checked here.
    ///
    /// # Returns
    /// - `Ok(())` - Updated (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_current_band(&self, user_id: i32, band_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::CurrentBandId, Expr::value(band_id))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the IDs of all users whose current band is `band_id`.
    pub async fn get_ids_by_current_band(&self, band_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::CurrentBandId.eq(band_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
