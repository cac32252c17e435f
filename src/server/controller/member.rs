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
        band::{AddMemberDto, BandMemberDto, UpdateMemberDto},
        notification::BandEventDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::band::{AddMemberParams, BandMember, UpdateMemberParams},
        service::member::BandMemberService,
        state::AppState,
    },
};

/// Tag for grouping band member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List a band's members ordered by join date.
///
/// # Access Control
/// - `BandMember` - Any member of the band
#[utoipa::path(
    get,
    path = "/api/bands/{band_id}/members",
    tag = MEMBER_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band members", body = Vec<BandMemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let members = BandMemberService::new(&state.db).list(band_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            members
                .into_iter()
                .map(BandMember::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Add a registered user to the band by email.
///
/// # Access Control
/// - `BandAdmin` - Admins of the band
///
/// # Returns
/// - `201 Created` - The new membership
/// - `404 Not Found` - No user with that email
/// - `409 Conflict` - Already a member
#[utoipa::path(
    post,
    path = "/api/bands/{band_id}/members",
    tag = MEMBER_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    request_body = AddMemberDto,
    responses(
        (status = 201, description = "Member added", body = BandMemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin of the band", body = ErrorDto),
        (status = 404, description = "No user with that email", body = ErrorDto),
        (status = 409, description = "User is already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    session: Session,
    Path(band_id): Path<i32>,
    Json(payload): Json<AddMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandAdmin(band_id)])
        .await?;

    let params = AddMemberParams::from_dto(band_id, payload)?;
    let member = BandMemberService::new(&state.db).add(params).await?;

    state.hub.publish(
        band_id,
        BandEventDto::MemberAdded {
            user_id: member.user_id,
            role: member.role,
        },
    );

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Change a member's role and instrument.
///
/// # Access Control
/// - `BandAdmin` - Admins of the band
///
/// # Returns
/// - `200 OK` - The updated membership
/// - `404 Not Found` - Not a member
/// - `409 Conflict` - Would demote the last admin
#[utoipa::path(
    put,
    path = "/api/bands/{band_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = BandMemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin of the band", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Band would lose its last admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Path((band_id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BandAdmin(band_id)])
        .await?;

    let params = UpdateMemberParams::from_dto(band_id, user_id, payload)?;
    let member = BandMemberService::new(&state.db).update(params).await?;

    state.hub.publish(
        band_id,
        BandEventDto::MemberUpdated {
            user_id: member.user_id,
            role: member.role,
        },
    );

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Remove a member from the band.
///
/// # Access Control
/// - `BandAdmin` - Admins may remove anyone
/// - `BandMember` - Members may remove themselves (leave the band)
///
/// # Returns
/// - `204 No Content` - Member removed
/// - `404 Not Found` - Not a member
/// - `409 Conflict` - The member is the last admin
#[utoipa::path(
    delete,
    path = "/api/bands/{band_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Band would lose its last admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((band_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let caller = guard.require(&[]).await?;
    guard.check_member_removal(&caller, band_id, user_id).await?;

    BandMemberService::new(&state.db)
        .remove(band_id, user_id)
        .await?;

    state
        .hub
        .publish(band_id, BandEventDto::MemberRemoved { user_id });

    Ok(StatusCode::NO_CONTENT)
}
