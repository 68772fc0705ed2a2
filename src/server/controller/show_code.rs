use axum::{extract::State, http::header, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, auth::Role, email::ShowCodeDto},
    server::{
        controller::util::{json_body::JsonBody, require_role::require_role},
        error::Error,
        model::app::AppState,
        service::show_code::ShowCodeService,
    },
};

pub static SHOW_CODE_TAG: &str = "show-code";

/// Fetch the signin-code page for a whitelisted email
///
/// Requests the page from the configured source using the current settings and returns
/// it sanitised: scripts are defused and embedded content is replaced with plain
/// containers. Errors are JSON; success is HTML.
#[utoipa::path(
    post,
    path = "/api/show-code",
    tag = SHOW_CODE_TAG,
    request_body = ShowCodeDto,
    responses(
        (status = 200, description = "Sanitised signin-code page", body = String, content_type = "text/html"),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 401, description = "No user session, or the source rejected the signincode password", body = ErrorDto),
        (status = 403, description = "Email not activated", body = ErrorDto),
        (status = 500, description = "Failed to fetch the signin-code page", body = ErrorDto)
    ),
)]
pub async fn show_code(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<ShowCodeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_role(&session, Role::User).await?;

    let html = ShowCodeService::new(&state.db, &state.signincode_client, &state.sanitizer)
        .show_code(payload.email.as_deref())
        .await?;

    tracing::debug!(username = %user.username, "Served signin-code page");

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html))
}
