use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Band::Table)
                    .if_not_exists()
                    .col(pk_auto(Band::Id))
                    .col(string(Band::Name))
                    .col(text(Band::Description))
                    .col(string_null(Band::LogoUrl))
                    .col(integer(Band::CreatedBy))
                    .col(timestamp_with_time_zone(Band::CreatedAt))
                    .col(timestamp_with_time_zone(Band::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_band_created_by")
                            .from(Band::Table, Band::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Band::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Band {
    Table,
    Id,
    Name,
    Description,
    LogoUrl,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
