//! Band member factory for creating membership entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating band memberships.
///
/// Defaults to role `member`, instrument `"Guitar"` and a join date of now.
pub struct BandMemberFactory<'a> {
    db: &'a DatabaseConnection,
    band_id: i32,
    user_id: i32,
    role: String,
    instrument: String,
    joined_at: DateTime<Utc>,
}

impl<'a> BandMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, band_id: i32, user_id: i32) -> Self {
        Self {
            db,
            band_id,
            user_id,
            role: "member".to_string(),
            instrument: "Guitar".to_string(),
            joined_at: Utc::now(),
        }
    }

    /// Sets the role (`admin`, `member` or `substitute`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = instrument.into();
        self
    }

    /// Overrides the join date, for tests that depend on membership order.
    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    pub async fn build(self) -> Result<entity::band_member::Model, DbErr> {
        entity::band_member::ActiveModel {
            band_id: ActiveValue::Set(self.band_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            instrument: ActiveValue::Set(self.instrument),
            joined_at: ActiveValue::Set(self.joined_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Adds a user to a band as a regular `member`.
pub async fn create_band_member(
    db: &DatabaseConnection,
    band_id: i32,
    user_id: i32,
) -> Result<entity::band_member::Model, DbErr> {
    BandMemberFactory::new(db, band_id, user_id).build().await
}
