use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{SetCurrentBandDto, UpdateProfileDto, UserDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the caller's own profile, including the selected band.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's profile.
///
/// Only fields present in the body change. `profile_image_url: null` removes the image.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid name or URL
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateProfileParams::from_dto(user.id, payload)?;
    let user = UserService::new(&state.db).update_profile(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Select the band the caller is working in, or clear the selection.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a member of the band
#[utoipa::path(
    put,
    path = "/api/users/me/current-band",
    tag = USER_TAG,
    request_body = SetCurrentBandDto,
    responses(
        (status = 200, description = "Current band updated", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_current_band(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetCurrentBandDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .set_current_band(user.id, payload.band_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get the public profile of a bandmate.
///
/// Users outside the caller's bands are reported as not found.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .get_visible_profile(viewer.id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_profile_dto())))
}
