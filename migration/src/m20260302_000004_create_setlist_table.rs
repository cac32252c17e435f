use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_band_table::Band;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setlist::Table)
                    .if_not_exists()
                    .col(pk_auto(Setlist::Id))
                    .col(integer(Setlist::BandId))
                    .col(string(Setlist::Name))
                    .col(text_null(Setlist::Description))
                    .col(integer(Setlist::CreatedBy))
                    .col(timestamp_with_time_zone(Setlist::CreatedAt))
                    .col(timestamp_with_time_zone(Setlist::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setlist_band_id")
                            .from(Setlist::Table, Setlist::BandId)
                            .to(Band::Table, Band::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Setlist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Setlist {
    Table,
    Id,
    BandId,
    Name,
    Description,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
