use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        auth::Role,
        user::{CreateUserDto, UpdateUserDto, UsersDto},
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            util::{json_body::JsonBody, require_role::require_role},
        },
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

/// List user accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "User accounts without password hashes", body = UsersDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    let users = UserService::new(&state.db).list().await?;

    Ok(Json(UsersDto { ok: true, users }))
}

/// Create a user account, or replace an existing one with the same username
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User saved", body = OkDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    UserService::new(&state.db).create(payload).await?;

    Ok(Json(OkDto::default()))
}

/// Update a user's password or active flag
#[utoipa::path(
    patch,
    path = "/api/admin/users/{username}",
    tag = ADMIN_TAG,
    params(("username" = String, Path, description = "Username of the account")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = OkDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    UserService::new(&state.db)
        .update(&username, payload)
        .await?;

    Ok(Json(OkDto::default()))
}

/// Delete a user account
///
/// Deleting an unknown username still succeeds.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{username}",
    tag = ADMIN_TAG,
    params(("username" = String, Path, description = "Username of the account")),
    responses(
        (status = 200, description = "User deleted", body = OkDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    UserService::new(&state.db).delete(&username).await?;

    Ok(Json(OkDto::default()))
}
