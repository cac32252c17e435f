use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user with an Argon2id password hash and logs them in.
///
/// # Returns
/// - `201 Created` - Account created, session established
/// - `400 Bad Request` - Invalid email, password or name
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).register(params).await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// Cycles the session ID to prevent session fixation.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(LoginParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    tracing::debug!(user_id = user.id, "User logged in");

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and clear the session.
///
/// # Returns
/// - `204 No Content` - Session cleared, also when nobody was logged in
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in user.
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
