//! Setlist domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::setlist::{CreateSetlistDto, SetlistDto, SongDto, SongInputDto, UpdateSetlistDto},
    server::{
        error::AppError,
        util::validate::{
            self, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_SHORT_TEXT_LENGTH,
            MAX_TITLE_LENGTH,
        },
    },
};

/// Song at a fixed position within a setlist.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub position: i32,
    pub title: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub song_key: Option<String>,
    pub notes: Option<String>,
}

impl Song {
    pub fn from_entity(entity: entity::setlist_song::Model) -> Self {
        Self {
            position: entity.position,
            title: entity.title,
            artist: entity.artist,
            duration_seconds: entity.duration_seconds,
            song_key: entity.song_key,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> SongDto {
        SongDto {
            position: self.position,
            title: self.title,
            artist: self.artist,
            duration_seconds: self.duration_seconds,
            song_key: self.song_key,
            notes: self.notes,
        }
    }
}

/// Ordered list of songs prepared for a band.
#[derive(Debug, Clone, PartialEq)]
pub struct Setlist {
    pub id: i32,
    pub band_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Songs ordered by position.
    pub songs: Vec<Song>,
}

impl Setlist {
    /// Converts a setlist row and its song rows, ordering songs by position.
    pub fn from_entity(
        entity: entity::setlist::Model,
        songs: Vec<entity::setlist_song::Model>,
    ) -> Self {
        let mut songs: Vec<Song> = songs.into_iter().map(Song::from_entity).collect();
        songs.sort_by_key(|song| song.position);

        Self {
            id: entity.id,
            band_id: entity.band_id,
            name: entity.name,
            description: entity.description,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            songs,
        }
    }

    /// Sum of all known song durations in seconds.
    pub fn total_duration_seconds(&self) -> i64 {
        self.songs
            .iter()
            .filter_map(|song| song.duration_seconds)
            .map(i64::from)
            .sum()
    }

    pub fn into_dto(self) -> SetlistDto {
        let total_duration_seconds = self.total_duration_seconds();

        SetlistDto {
            id: self.id,
            band_id: self.band_id,
            name: self.name,
            description: self.description,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
            songs: self.songs.into_iter().map(Song::into_dto).collect(),
            total_duration_seconds,
        }
    }
}

/// Validated song input; position comes from its index in the submitted list.
#[derive(Debug, Clone, PartialEq)]
pub struct SongParams {
    pub title: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub song_key: Option<String>,
    pub notes: Option<String>,
}

impl SongParams {
    pub fn from_dto(dto: SongInputDto) -> Result<Self, AppError> {
        if dto.duration_seconds.is_some_and(|seconds| seconds < 0) {
            return Err(AppError::BadRequest(
                "Song duration must not be negative".to_string(),
            ));
        }

        Ok(Self {
            title: validate::required_text("Song title", &dto.title, MAX_TITLE_LENGTH)?,
            artist: validate::optional_text("Artist", dto.artist, MAX_TITLE_LENGTH)?,
            duration_seconds: dto.duration_seconds,
            song_key: validate::optional_text("Key", dto.song_key, MAX_NAME_LENGTH)?,
            notes: validate::optional_text("Notes", dto.notes, MAX_SHORT_TEXT_LENGTH)?,
        })
    }

    fn from_dtos(dtos: Vec<SongInputDto>) -> Result<Vec<Self>, AppError> {
        dtos.into_iter().map(Self::from_dto).collect()
    }
}

#[derive(Debug, Clone)]
pub struct CreateSetlistParams {
    pub band_id: i32,
    pub created_by: i32,
    pub name: String,
    pub description: Option<String>,
    pub songs: Vec<SongParams>,
}

impl CreateSetlistParams {
    pub fn from_dto(created_by: i32, dto: CreateSetlistDto) -> Result<Self, AppError> {
        Ok(Self {
            band_id: dto.band_id,
            created_by,
            name: validate::required_text("Setlist name", &dto.name, MAX_NAME_LENGTH)?,
            description: validate::optional_text(
                "Description",
                dto.description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            songs: SongParams::from_dtos(dto.songs)?,
        })
    }
}

/// Full replacement of a setlist, including its songs.
#[derive(Debug, Clone)]
pub struct UpdateSetlistParams {
    pub setlist_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub songs: Vec<SongParams>,
}

impl UpdateSetlistParams {
    pub fn from_dto(setlist_id: i32, dto: UpdateSetlistDto) -> Result<Self, AppError> {
        Ok(Self {
            setlist_id,
            name: validate::required_text("Setlist name", &dto.name, MAX_NAME_LENGTH)?,
            description: validate::optional_text(
                "Description",
                dto.description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            songs: SongParams::from_dtos(dto.songs)?,
        })
    }
}
