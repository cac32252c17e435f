use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        notification::BandEventDto,
        rehearsal::{
            AttendanceDto, CreateRehearsalDto, RehearsalDto, SetAttendanceDto, UpdateRehearsalDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::rehearsal::{
            CreateRehearsalParams, Rehearsal, RehearsalFilter, SetAttendanceParams,
            UpdateRehearsalParams,
        },
        service::rehearsal::RehearsalService,
        state::AppState,
    },
};

/// Tag for grouping rehearsal endpoints in OpenAPI documentation
pub static REHEARSAL_TAG: &str = "rehearsal";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RehearsalQuery {
    /// Band to list rehearsals for
    pub band_id: i32,
    /// Only rehearsals starting at or after this time
    pub from: Option<DateTime<Utc>>,
    /// Only rehearsals starting before this time
    pub to: Option<DateTime<Utc>>,
}

fn rehearsal_not_found() -> AppError {
    AppError::NotFound("Rehearsal not found".to_string())
}

/// List a band's rehearsals in start order.
///
/// # Access Control
/// - `BandMember` - Any member of the band
#[utoipa::path(
    get,
    path = "/api/rehearsals",
    tag = REHEARSAL_TAG,
    params(RehearsalQuery),
    responses(
        (status = 200, description = "Rehearsals of the band", body = Vec<RehearsalDto>),
        (status = 400, description = "Invalid time window", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rehearsals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RehearsalQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandMember(query.band_id)])
        .await?;

    let filter = RehearsalFilter::new(query.band_id, query.from, query.to)?;
    let rehearsals = RehearsalService::new(&state.db).list(filter).await?;

    Ok((
        StatusCode::OK,
        Json(
            rehearsals
                .into_iter()
                .map(Rehearsal::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Schedule a rehearsal.
///
/// # Access Control
/// - `BandAdmin` - Admins of the band
///
/// # Returns
/// - `201 Created` - The scheduled rehearsal
/// - `400 Bad Request` - Invalid title or times, or a setlist of another band
#[utoipa::path(
    post,
    path = "/api/rehearsals",
    tag = REHEARSAL_TAG,
    request_body = CreateRehearsalDto,
    responses(
        (status = 201, description = "Rehearsal scheduled", body = RehearsalDto),
        (status = 400, description = "Invalid rehearsal data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin of the band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rehearsal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRehearsalDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandAdmin(payload.band_id)])
        .await?;

    let params = CreateRehearsalParams::from_dto(user.id, payload)?;
    let rehearsal = RehearsalService::new(&state.db).create(params).await?;

    state.hub.publish(
        rehearsal.band_id,
        BandEventDto::RehearsalCreated {
            rehearsal_id: rehearsal.id,
            title: rehearsal.title.clone(),
            start_time: rehearsal.start_time,
        },
    );

    Ok((StatusCode::CREATED, Json(rehearsal.into_dto())))
}

/// Get a rehearsal with its attendance.
///
/// # Access Control
/// - `BandMember` - Any member of the rehearsal's band
#[utoipa::path(
    get,
    path = "/api/rehearsals/{rehearsal_id}",
    tag = REHEARSAL_TAG,
    params(
        ("rehearsal_id" = i32, Path, description = "Rehearsal ID")
    ),
    responses(
        (status = 200, description = "Rehearsal with attendance", body = RehearsalDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rehearsal(
    State(state): State<AppState>,
    session: Session,
    Path(rehearsal_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user = guard.require(&[]).await?;

    let rehearsal = RehearsalService::new(&state.db)
        .get_by_id(rehearsal_id)
        .await?
        .ok_or_else(rehearsal_not_found)?;

    guard
        .check(&user, &[Permission::BandMember(rehearsal.band_id)])
        .await?;

    Ok((StatusCode::OK, Json(rehearsal.into_dto())))
}

/// Replace a rehearsal.
///
/// Moving the start time re-arms the reminder.
///
/// # Access Control
/// - `BandAdmin` - Admins of the rehearsal's band
#[utoipa::path(
    put,
    path = "/api/rehearsals/{rehearsal_id}",
    tag = REHEARSAL_TAG,
    params(
        ("rehearsal_id" = i32, Path, description = "Rehearsal ID")
    ),
    request_body = UpdateRehearsalDto,
    responses(
        (status = 200, description = "Rehearsal updated", body = RehearsalDto),
        (status = 400, description = "Invalid rehearsal data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin of the band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rehearsal(
    State(state): State<AppState>,
    session: Session,
    Path(rehearsal_id): Path<i32>,
    Json(payload): Json<UpdateRehearsalDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user = guard.require(&[]).await?;

    let service = RehearsalService::new(&state.db);
    let existing = service
        .get_by_id(rehearsal_id)
        .await?
        .ok_or_else(rehearsal_not_found)?;

    guard
        .check(&user, &[Permission::BandAdmin(existing.band_id)])
        .await?;

    let params = UpdateRehearsalParams::from_dto(rehearsal_id, payload)?;
    let rehearsal = service
        .update(existing.band_id, params)
        .await?
        .ok_or_else(rehearsal_not_found)?;

    state.hub.publish(
        rehearsal.band_id,
        BandEventDto::RehearsalUpdated {
            rehearsal_id: rehearsal.id,
            title: rehearsal.title.clone(),
            start_time: rehearsal.start_time,
        },
    );

    Ok((StatusCode::OK, Json(rehearsal.into_dto())))
}

/// Delete a rehearsal and its attendance.
///
/// # Access Control
/// - `BandAdmin` - Admins of the rehearsal's band
#[utoipa::path(
    delete,
    path = "/api/rehearsals/{rehearsal_id}",
    tag = REHEARSAL_TAG,
    params(
        ("rehearsal_id" = i32, Path, description = "Rehearsal ID")
    ),
    responses(
        (status = 204, description = "Rehearsal deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin of the band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rehearsal(
    State(state): State<AppState>,
    session: Session,
    Path(rehearsal_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user = guard.require(&[]).await?;

    let service = RehearsalService::new(&state.db);
    let existing = service
        .get_by_id(rehearsal_id)
        .await?
        .ok_or_else(rehearsal_not_found)?;

    guard
        .check(&user, &[Permission::BandAdmin(existing.band_id)])
        .await?;

    if !service.delete(rehearsal_id).await? {
        return Err(rehearsal_not_found());
    }

    state
        .hub
        .publish(existing.band_id, BandEventDto::RehearsalDeleted { rehearsal_id });

    Ok(StatusCode::NO_CONTENT)
}

/// Set the caller's own attendance for a rehearsal.
///
/// # Access Control
/// - `BandMember` - Any member of the rehearsal's band, substitutes included
#[utoipa::path(
    put,
    path = "/api/rehearsals/{rehearsal_id}/attendance",
    tag = REHEARSAL_TAG,
    params(
        ("rehearsal_id" = i32, Path, description = "Rehearsal ID")
    ),
    request_body = SetAttendanceDto,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceDto),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_attendance(
    State(state): State<AppState>,
    session: Session,
    Path(rehearsal_id): Path<i32>,
    Json(payload): Json<SetAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user = guard.require(&[]).await?;

    let service = RehearsalService::new(&state.db);
    let rehearsal = service
        .get_by_id(rehearsal_id)
        .await?
        .ok_or_else(rehearsal_not_found)?;

    guard
        .check(&user, &[Permission::BandMember(rehearsal.band_id)])
        .await?;

    let params = SetAttendanceParams::from_dto(rehearsal_id, user.id, payload)?;
    let attendance = service.set_attendance(params).await?;

    state.hub.publish(
        rehearsal.band_id,
        BandEventDto::AttendanceUpdated {
            rehearsal_id,
            user_id: attendance.user_id,
            status: attendance.status,
        },
    );

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}
