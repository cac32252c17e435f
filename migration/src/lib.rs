pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_band_table;
mod m20260301_000003_create_band_member_table;
mod m20260302_000004_create_setlist_table;
mod m20260302_000005_create_setlist_song_table;
mod m20260303_000006_create_rehearsal_table;
mod m20260303_000007_create_rehearsal_attendance_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_band_table::Migration),
            Box::new(m20260301_000003_create_band_member_table::Migration),
            Box::new(m20260302_000004_create_setlist_table::Migration),
            Box::new(m20260302_000005_create_setlist_song_table::Migration),
            Box::new(m20260303_000006_create_rehearsal_table::Migration),
            Box::new(m20260303_000007_create_rehearsal_attendance_table::Migration),
        ]
    }
}
