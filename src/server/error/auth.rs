use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request did not come from a logged in browser session.
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    ///
    /// # Fields
    /// - User ID stored in the session
    #[error("User ID {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// Email and password do not match a stored account.
    ///
    /// Unknown emails and wrong passwords share this variant so the response does not
    /// reveal which accounts exist. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user lacks the band permission required for the operation.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of the missing permission, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not logged in"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
///
/// Errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
