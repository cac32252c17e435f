use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000004_create_setlist_table::Setlist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SetlistSong::Table)
                    .if_not_exists()
                    .col(pk_auto(SetlistSong::Id))
                    .col(integer(SetlistSong::SetlistId))
                    .col(integer(SetlistSong::Position))
                    .col(string(SetlistSong::Title))
                    .col(string_null(SetlistSong::Artist))
                    .col(integer_null(SetlistSong::DurationSeconds))
                    .col(string_null(SetlistSong::SongKey))
                    .col(text_null(SetlistSong::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setlist_song_setlist_id")
                            .from(SetlistSong::Table, SetlistSong::SetlistId)
                            .to(Setlist::Table, Setlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SetlistSong::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SetlistSong {
    Table,
    Id,
    SetlistId,
    Position,
    Title,
    Artist,
    DurationSeconds,
    SongKey,
    Notes,
}
