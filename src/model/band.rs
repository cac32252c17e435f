use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role of a member within a band.
///
/// - `Admin` manages the band, its members, rehearsals and setlists
/// - `Member` sees everything, edits setlists and answers attendance
/// - `Substitute` sees everything and answers attendance
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Admin,
    Member,
    Substitute,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BandMemberDto {
    pub id: i32,
    pub band_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub role: MemberRole,
    pub instrument: String,
    pub joined_at: DateTime<Utc>,
}

/// A band with its members ordered by join date.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BandDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub members: Vec<BandMemberDto>,
}

/// Entry in the caller's band list.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BandSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    /// The caller's role in this band.
    pub role: MemberRole,
    pub member_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateBandDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Instrument the creator plays in the new band.
    #[serde(default)]
    pub instrument: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateBandDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AddMemberDto {
    pub email: String,
    pub role: MemberRole,
    #[serde(default)]
    pub instrument: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateMemberDto {
    pub role: MemberRole,
    #[serde(default)]
    pub instrument: String,
}
