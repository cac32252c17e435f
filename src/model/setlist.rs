use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SongDto {
    /// Zero-based position within the setlist.
    pub position: i32,
    pub title: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub song_key: Option<String>,
    pub notes: Option<String>,
}

/// Song as submitted by the client; its position is taken from the list order.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SongInputDto {
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub song_key: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SetlistDto {
    pub id: i32,
    pub band_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub songs: Vec<SongDto>,
    /// Sum of the durations of all songs with a known duration.
    pub total_duration_seconds: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateSetlistDto {
    pub band_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub songs: Vec<SongInputDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateSetlistDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub songs: Vec<SongInputDto>,
}
