use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_band_table::Band, m20260302_000004_create_setlist_table::Setlist,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rehearsal::Table)
                    .if_not_exists()
                    .col(pk_auto(Rehearsal::Id))
                    .col(integer(Rehearsal::BandId))
                    .col(string(Rehearsal::Title))
                    .col(text_null(Rehearsal::Description))
                    .col(string_null(Rehearsal::Location))
                    .col(timestamp_with_time_zone(Rehearsal::StartTime))
                    .col(timestamp_with_time_zone(Rehearsal::EndTime))
                    .col(integer_null(Rehearsal::SetlistId))
                    .col(integer(Rehearsal::CreatedBy))
                    .col(timestamp_with_time_zone_null(Rehearsal::ReminderSentAt))
                    .col(timestamp_with_time_zone(Rehearsal::CreatedAt))
                    .col(timestamp_with_time_zone(Rehearsal::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rehearsal_band_id")
                            .from(Rehearsal::Table, Rehearsal::BandId)
                            .to(Band::Table, Band::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rehearsal_setlist_id")
                            .from(Rehearsal::Table, Rehearsal::SetlistId)
                            .to(Setlist::Table, Setlist::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rehearsal_band_start_time")
                    .table(Rehearsal::Table)
                    .col(Rehearsal::BandId)
                    .col(Rehearsal::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rehearsal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rehearsal {
    Table,
    Id,
    BandId,
    Title,
    Description,
    Location,
    StartTime,
    EndTime,
    SetlistId,
    CreatedBy,
    ReminderSentAt,
    CreatedAt,
    UpdatedAt,
}
