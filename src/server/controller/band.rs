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
        band::{BandDto, BandSummaryDto, CreateBandDto, UpdateBandDto},
        notification::BandEventDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::band::{BandSummary, CreateBandParams, UpdateBandParams},
        service::band::BandService,
        state::AppState,
    },
};

/// Tag for grouping band endpoints in OpenAPI documentation
pub static BAND_TAG: &str = "band";

/// List the caller's bands.
///
/// Bands are ordered by name and carry the caller's role and the member count.
#[utoipa::path(
    get,
    path = "/api/bands",
    tag = BAND_TAG,
    responses(
        (status = 200, description = "Bands of the caller", body = Vec<BandSummaryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bands(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bands = BandService::new(&state.db).list_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            bands
                .into_iter()
                .map(BandSummary::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a band.
///
/// The caller becomes the band's admin with the given instrument. If the caller has no
/// band selected, the new band becomes their current band.
///
/// # Returns
/// - `201 Created` - The created band with its single member
/// - `400 Bad Request` - Invalid name, description or logo
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/bands",
    tag = BAND_TAG,
    request_body = CreateBandDto,
    responses(
        (status = 201, description = "Band created", body = BandDto),
        (status = 400, description = "Invalid band data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_band(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBandDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateBandParams::from_dto(user.id, payload)?;
    let band = BandService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(band.into_dto())))
}

/// Get a band with its members.
///
/// # Access Control
/// - `BandMember` - Any member of the band
#[utoipa::path(
    get,
    path = "/api/bands/{band_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band with members", body = BandDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_band(
    State(state): State<AppState>,
    session: Session,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let band = BandService::new(&state.db)
        .get_by_id(band_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Band not found".to_string()))?;

    Ok((StatusCode::OK, Json(band.into_dto())))
}

/// Replace a band's name, description and logo.
///
/// # Access Control
/// - `BandAdmin` - Admins of the band
#[utoipa::path(
    put,
    path = "/api/bands/{band_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    request_body = UpdateBandDto,
    responses(
        (status = 200, description = "Band updated", body = BandDto),
        (status = 400, description = "Invalid band data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin of the band", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_band(
    State(state): State<AppState>,
    session: Session,
    Path(band_id): Path<i32>,
    Json(payload): Json<UpdateBandDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandAdmin(band_id)])
        .await?;

    let params = UpdateBandParams::from_dto(band_id, payload)?;
    let band = BandService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound("Band not found".to_string()))?;

    state.hub.publish(
        band.id,
        BandEventDto::BandUpdated {
            name: band.name.clone(),
        },
    );

    Ok((StatusCode::OK, Json(band.into_dto())))
}

/// Delete a band with its members, rehearsals and setlists.
///
/// Members who had the band selected fall back to another of their bands.
///
/// # Access Control
/// - `BandAdmin` - Admins of the band
#[utoipa::path(
    delete,
    path = "/api/bands/{band_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 204, description = "Band deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin of the band", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_band(
    State(state): State<AppState>,
    session: Session,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandAdmin(band_id)])
        .await?;

    if !BandService::new(&state.db).delete(band_id).await? {
        return Err(AppError::NotFound("Band not found".to_string()));
    }

    state.hub.publish(band_id, BandEventDto::BandDeleted);

    Ok(StatusCode::NO_CONTENT)
}
