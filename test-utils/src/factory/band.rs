//! Band factory for creating test band entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bands.
///
/// Only inserts the band row. Use `helpers::create_band_with_admin` when the test
/// also needs the creator's admin membership.
pub struct BandFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: i32,
    name: String,
    description: String,
    logo_url: Option<String>,
}

impl<'a> BandFactory<'a> {
    /// Creates a new BandFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Band {id}"`
    /// - description: empty
    /// - no logo
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        Self {
            db,
            created_by,
            name: format!("Band {}", next_id()),
            description: String::new(),
            logo_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    pub async fn build(self) -> Result<entity::band::Model, DbErr> {
        let now = Utc::now();
        entity::band::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            logo_url: ActiveValue::Set(self.logo_url),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a band with default values.
pub async fn create_band(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::band::Model, DbErr> {
    BandFactory::new(db, created_by).build().await
}
