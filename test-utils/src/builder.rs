use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Band};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Band)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for band and membership operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Band
    /// - BandMember, unique per band and user as in the migration
    pub fn with_band_tables(self) -> Self {
        let mut builder = self.with_table(User).with_table(Band);

        let mut band_member =
            Schema::new(sea_orm::DbBackend::Sqlite).create_table_from_entity(BandMember);
        band_member.index(
            Index::create()
                .name("idx_band_member_band_user")
                .col(entity::band_member::Column::BandId)
                .col(entity::band_member::Column::UserId)
                .unique(),
        );
        builder.tables.push(band_member);

        builder
    }

    /// Adds every table in the schema.
    ///
    /// Band tables plus setlists, songs, rehearsals and attendance. Use this for
    /// anything that touches rehearsals or setlists, including band deletion.
    pub fn with_all_tables(self) -> Self {
        self.with_band_tables()
            .with_table(Setlist)
            .with_table(SetlistSong)
            .with_table(Rehearsal)
            .with_table(RehearsalAttendance)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
