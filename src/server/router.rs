use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, band, health, member, rehearsal, setlist, socket, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Band Rehearsal Scheduler",
        description = "Bands, members, rehearsals and setlists"
    ),
    tags(
        (name = "auth", description = "Registration and session login"),
        (name = "user", description = "Own profile and bandmate profiles"),
        (name = "band", description = "Bands"),
        (name = "member", description = "Band membership"),
        (name = "rehearsal", description = "Rehearsals and attendance"),
        (name = "setlist", description = "Setlists and songs"),
        (name = "health", description = "Liveness")
    )
)]
struct ApiDoc;

/// Builds the API routes and their OpenAPI document.
///
/// The document is served at `/api-docs/openapi.json` with Swagger UI at `/api-docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_session_user))
        .routes(routes!(user::get_me, user::update_me))
        .routes(routes!(user::set_current_band))
        .routes(routes!(user::get_user_profile))
        .routes(routes!(band::get_bands, band::create_band))
        .routes(routes!(band::get_band, band::update_band, band::delete_band))
        .routes(routes!(member::get_members, member::add_member))
        .routes(routes!(member::update_member, member::remove_member))
        .routes(routes!(
            rehearsal::get_rehearsals,
            rehearsal::create_rehearsal
        ))
        .routes(routes!(
            rehearsal::get_rehearsal,
            rehearsal::update_rehearsal,
            rehearsal::delete_rehearsal
        ))
        .routes(routes!(rehearsal::set_attendance))
        .routes(routes!(setlist::get_setlists, setlist::create_setlist))
        .routes(routes!(
            setlist::get_setlist,
            setlist::update_setlist,
            setlist::delete_setlist
        ))
        .routes(routes!(health::health))
        .split_for_parts();

    router
        .route("/api/ws", get(socket::connect))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api))
        .fallback(health::not_found)
}

/// Attaches state and the middleware stack to the API routes.
pub fn app(
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
    cors: CorsLayer,
) -> Router {
    router()
        .with_state(state)
        .layer(session)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
