use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        notification::BandEventDto,
        setlist::{CreateSetlistDto, SetlistDto, UpdateSetlistDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::setlist::{CreateSetlistParams, Setlist, UpdateSetlistParams},
        service::setlist::SetlistService,
        state::AppState,
    },
};

/// Tag for grouping setlist endpoints in OpenAPI documentation
pub static SETLIST_TAG: &str = "setlist";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SetlistQuery {
    /// Band to list setlists for
    pub band_id: i32,
}

fn setlist_not_found() -> AppError {
    AppError::NotFound("Setlist not found".to_string())
}

/// List a band's setlists ordered by name.
///
/// # Access Control
/// - `BandMember` - Any member of the band
#[utoipa::path(
    get,
    path = "/api/setlists",
    tag = SETLIST_TAG,
    params(SetlistQuery),
    responses(
        (status = 200, description = "Setlists of the band", body = Vec<SetlistDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setlists(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SetlistQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandMember(query.band_id)])
        .await?;

    let setlists = SetlistService::new(&state.db).list(query.band_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            setlists
                .into_iter()
                .map(Setlist::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a setlist.
///
/// Songs are numbered from 0 in the given order.
///
/// # Access Control
/// - `BandEditor` - Admins and members of the band, not substitutes
#[utoipa::path(
    post,
    path = "/api/setlists",
    tag = SETLIST_TAG,
    request_body = CreateSetlistDto,
    responses(
        (status = 201, description = "Setlist created", body = SetlistDto),
        (status = 400, description = "Invalid setlist data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit setlists of the band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_setlist(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSetlistDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandEditor(payload.band_id)])
        .await?;

    let params = CreateSetlistParams::from_dto(user.id, payload)?;
    let setlist = SetlistService::new(&state.db).create(params).await?;

    state.hub.publish(
        setlist.band_id,
        BandEventDto::SetlistCreated {
            setlist_id: setlist.id,
            name: setlist.name.clone(),
        },
    );

    Ok((StatusCode::CREATED, Json(setlist.into_dto())))
}

/// Get a setlist with its songs.
///
/// # Access Control
/// - `BandMember` - Any member of the setlist's band
#[utoipa::path(
    get,
    path = "/api/setlists/{setlist_id}",
    tag = SETLIST_TAG,
    params(
        ("setlist_id" = i32, Path, description = "Setlist ID")
    ),
    responses(
        (status = 200, description = "Setlist with songs", body = SetlistDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 404, description = "Setlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setlist(
    State(state): State<AppState>,
    session: Session,
    Path(setlist_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user = guard.require(&[]).await?;

    let setlist = SetlistService::new(&state.db)
        .get_by_id(setlist_id)
        .await?
        .ok_or_else(setlist_not_found)?;

    guard
        .check(&user, &[Permission::BandMember(setlist.band_id)])
        .await?;

    Ok((StatusCode::OK, Json(setlist.into_dto())))
}

/// Replace a setlist and its songs.
///
/// # Access Control
/// - `BandEditor` - Admins and members of the setlist's band
#[utoipa::path(
    put,
    path = "/api/setlists/{setlist_id}",
    tag = SETLIST_TAG,
    params(
        ("setlist_id" = i32, Path, description = "Setlist ID")
    ),
    request_body = UpdateSetlistDto,
    responses(
        (status = 200, description = "Setlist updated", body = SetlistDto),
        (status = 400, description = "Invalid setlist data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit setlists of the band", body = ErrorDto),
        (status = 404, description = "Setlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_setlist(
    State(state): State<AppState>,
    session: Session,
    Path(setlist_id): Path<i32>,
    Json(payload): Json<UpdateSetlistDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user = guard.require(&[]).await?;

    let service = SetlistService::new(&state.db);
    let existing = service
        .get_by_id(setlist_id)
        .await?
        .ok_or_else(setlist_not_found)?;

    guard
        .check(&user, &[Permission::BandEditor(existing.band_id)])
        .await?;

    let params = UpdateSetlistParams::from_dto(setlist_id, payload)?;
    let setlist = service
        .update(params)
        .await?
        .ok_or_else(setlist_not_found)?;

    state.hub.publish(
        setlist.band_id,
        BandEventDto::SetlistUpdated {
            setlist_id: setlist.id,
            name: setlist.name.clone(),
        },
    );

    Ok((StatusCode::OK, Json(setlist.into_dto())))
}

/// Delete a setlist.
///
/// Rehearsals that used it keep going without a setlist.
///
/// # Access Control
/// - `BandEditor` - Admins and members of the setlist's band
#[utoipa::path(
    delete,
    path = "/api/setlists/{setlist_id}",
    tag = SETLIST_TAG,
    params(
        ("setlist_id" = i32, Path, description = "Setlist ID")
    ),
    responses(
        (status = 204, description = "Setlist deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit setlists of the band", body = ErrorDto),
        (status = 404, description = "Setlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_setlist(
    State(state): State<AppState>,
    session: Session,
    Path(setlist_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user = guard.require(&[]).await?;

    let service = SetlistService::new(&state.db);
    let existing = service
        .get_by_id(setlist_id)
        .await?
        .ok_or_else(setlist_not_found)?;

    guard
        .check(&user, &[Permission::BandEditor(existing.band_id)])
        .await?;

    if !service.delete(setlist_id).await? {
        return Err(setlist_not_found());
    }

    state
        .hub
        .publish(existing.band_id, BandEventDto::SetlistDeleted { setlist_id });

    Ok(StatusCode::NO_CONTENT)
}
