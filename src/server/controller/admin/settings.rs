use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        auth::Role,
        settings::{SettingsResponseDto, UpdateSettingsDto},
        user::UpdateAdminPasswordDto,
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            util::{json_body::JsonBody, require_role::require_role},
        },
        error::Error,
        model::app::AppState,
        service::{settings::SettingsService, user::UserService},
    },
};

/// Get the proxy settings
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Current settings", body = SettingsResponseDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    let settings = SettingsService::new(&state.db).get().await?;

    Ok(Json(SettingsResponseDto { ok: true, settings }))
}

/// Update the proxy settings
///
/// Absent fields keep their current value. Changes apply to the very next show-code request.
#[utoipa::path(
    patch,
    path = "/api/admin/settings",
    tag = ADMIN_TAG,
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings after the update", body = SettingsResponseDto),
        (status = 400, description = "Invalid source_url or fetch_mode", body = ErrorDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<UpdateSettingsDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    let settings = SettingsService::new(&state.db).update(payload).await?;

    Ok(Json(SettingsResponseDto { ok: true, settings }))
}

/// Change the admin password
#[utoipa::path(
    patch,
    path = "/api/admin/password",
    tag = ADMIN_TAG,
    request_body = UpdateAdminPasswordDto,
    responses(
        (status = 200, description = "Password changed", body = OkDto),
        (status = 400, description = "Missing password", body = ErrorDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin_password(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<UpdateAdminPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    UserService::new(&state.db)
        .update_admin_password(payload)
        .await?;

    Ok(Json(OkDto::default()))
}
