use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, email::EmailsDto},
    server::{
        controller::util::require_role::require_session,
        error::Error,
        model::app::AppState,
        service::email::EmailService,
    },
};

pub static EMAIL_TAG: &str = "email";

/// List whitelisted emails
///
/// Available to any logged-in session so users can pick an address to request a code for.
#[utoipa::path(
    get,
    path = "/api/emails",
    tag = EMAIL_TAG,
    responses(
        (status = 200, description = "Whitelisted emails in insertion order", body = EmailsDto),
        (status = 401, description = "No valid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_emails(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_session(&session).await?;

    let emails = EmailService::new(&state.db).list().await?;

    Ok(Json(EmailsDto::new(emails)))
}
