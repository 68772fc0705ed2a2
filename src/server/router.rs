//! HTTP routing and OpenAPI documentation.
//!
//! Every API endpoint is registered here together with its utoipa path spec. The collected
//! OpenAPI document is served at `/api/docs/openapi.json` with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are registered in the same `routes!` call so they end up on one
/// axum method router.
///
/// # Registered Endpoints
/// - `POST /api/auth/login`, `POST /api/auth/logout`, `GET /api/auth/me`
/// - `GET|PATCH /api/admin/settings`, `PATCH /api/admin/password`
/// - `GET|POST /api/admin/users`, `PATCH|DELETE /api/admin/users/{username}`
/// - `GET|POST /api/admin/emails`, `DELETE /api/admin/emails/{email}`
/// - `GET /api/emails`
/// - `POST /api/show-code`
///
/// The session layer is not applied here; the caller adds it after attaching state.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Codegate", description = "Codegate signin-code proxy API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Login, logout and session identity"),
        (name = controller::admin::ADMIN_TAG, description = "Admin management of settings, users and the email whitelist"),
        (name = controller::email::EMAIL_TAG, description = "Whitelist listing for any session"),
        (name = controller::show_code::SHOW_CODE_TAG, description = "Sanitized signin-code page proxy"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .routes(routes!(
            controller::admin::settings::get_settings,
            controller::admin::settings::update_settings
        ))
        .routes(routes!(controller::admin::settings::update_admin_password))
        .routes(routes!(
            controller::admin::users::list_users,
            controller::admin::users::create_user
        ))
        .routes(routes!(
            controller::admin::users::update_user,
            controller::admin::users::delete_user
        ))
        .routes(routes!(
            controller::admin::emails::list_emails,
            controller::admin::emails::add_email
        ))
        .routes(routes!(controller::admin::emails::remove_email))
        .routes(routes!(controller::email::list_emails))
        .routes(routes!(controller::show_code::show_code))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
