use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// The authenticated user's own account, including the email address.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    /// Band currently selected in the client, if any.
    pub current_band_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Public view of another user, visible to users sharing a band with them.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserProfileDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Partial profile update; absent fields are left untouched.
///
/// `profile_image_url` distinguishes between an absent field (keep the current image) and
/// an explicit `null` (remove the image).
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateProfileDto {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub profile_image_url: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SetCurrentBandDto {
    pub band_id: Option<i32>,
}

/// Wraps any value that is present in the payload, including `null`, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
