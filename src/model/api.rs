use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every error response.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
