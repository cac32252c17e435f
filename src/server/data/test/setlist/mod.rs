use crate::server::{
    data::setlist::SetlistRepository,
    model::setlist::{CreateSetlistParams, SongParams, UpdateSetlistParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_band;
mod update;

fn song(title: &str, duration_seconds: Option<i32>) -> SongParams {
    SongParams {
        title: title.to_string(),
        artist: Some("The Beatles".to_string()),
        duration_seconds,
        song_key: None,
        notes: None,
    }
}
