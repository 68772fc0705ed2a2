use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::Role,
        email::{AddEmailDto, EmailsDto},
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            util::{json_body::JsonBody, require_role::require_role},
        },
        error::Error,
        model::app::AppState,
        service::email::EmailService,
    },
};

/// List whitelisted emails
#[utoipa::path(
    get,
    path = "/api/admin/emails",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Whitelisted emails in insertion order", body = EmailsDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_emails(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    let emails = EmailService::new(&state.db).list().await?;

    Ok(Json(EmailsDto::new(emails)))
}

/// Whitelist an email
///
/// The address is trimmed and lowercased; adding one that is already present is a no-op.
#[utoipa::path(
    post,
    path = "/api/admin/emails",
    tag = ADMIN_TAG,
    request_body = AddEmailDto,
    responses(
        (status = 200, description = "Whitelist after the addition", body = EmailsDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_email(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<AddEmailDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    let emails = EmailService::new(&state.db)
        .add(payload.email.as_deref())
        .await?;

    Ok(Json(EmailsDto::new(emails)))
}

/// Remove an email from the whitelist
#[utoipa::path(
    delete,
    path = "/api/admin/emails/{email}",
    tag = ADMIN_TAG,
    params(("email" = String, Path, description = "Email to remove, matched after normalisation")),
    responses(
        (status = 200, description = "Whitelist after the removal", body = EmailsDto),
        (status = 401, description = "No admin session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_email(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, Role::Admin).await?;

    let emails = EmailService::new(&state.db).remove(&email).await?;

    Ok(Json(EmailsDto::new(emails)))
}
