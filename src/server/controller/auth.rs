use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        auth::{LoginDto, MeDto},
    },
    server::{
        controller::util::{json_body::JsonBody, require_role::current_user},
        error::Error,
        model::{app::AppState, session::user::SessionUser},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in as admin or user
///
/// Verifies the credentials for the requested role and binds the identity to a fresh
/// session id. The session lasts 8 hours from login regardless of activity.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = OkDto),
        (status = 400, description = "Missing fields or invalid role", body = ErrorDto),
        (status = 401, description = "Invalid admin, user not found or wrong password", body = ErrorDto),
        (status = 403, description = "User not active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(payload, Utc::now())
        .await?;

    // New id on every login so a pre-login session id is never authenticated
    session.cycle_id().await?;
    SessionUser::insert(&session, &user).await?;

    tracing::info!(role = %user.role, username = %user.username, "Login succeeded");

    Ok(Json(OkDto::default()))
}

/// Log out, destroying the session
///
/// Succeeds for anonymous sessions too.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session destroyed", body = OkDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if let Some(user) = SessionUser::get(&session).await? {
        tracing::info!(role = %user.role, username = %user.username, "Logged out");
    }

    session.flush().await?;

    Ok(Json(OkDto::default()))
}

/// Get the identity bound to the current session
///
/// `user` is `null` for anonymous or expired sessions.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session identity", body = MeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(session: Session) -> Result<impl IntoResponse, Error> {
    let user = current_user(&session).await?;

    Ok(Json(MeDto {
        ok: true,
        user: user.map(Into::into),
    }))
}
