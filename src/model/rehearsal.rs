use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Going,
    Maybe,
    NotGoing,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AttendanceDto {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub status: AttendanceStatus,
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A rehearsal with the attendance answers given so far.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RehearsalDto {
    pub id: i32,
    pub band_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub setlist_id: Option<i32>,
    pub created_by: i32,
    pub reminder_sent_at: Option<DateTime<Utc>>,
    pub attendance: Vec<AttendanceDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateRehearsalDto {
    pub band_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub setlist_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateRehearsalDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub setlist_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SetAttendanceDto {
    pub status: AttendanceStatus,
    #[serde(default)]
    pub note: Option<String>,
}
