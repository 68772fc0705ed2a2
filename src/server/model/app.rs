use sea_orm::DatabaseConnection;

use crate::server::{client::SigninCodeClient, sanitize::HtmlSanitizer};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// The only outbound client; its relaxed TLS policy applies to the signin-code source alone
    pub signincode_client: SigninCodeClient,
    pub sanitizer: HtmlSanitizer,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        signincode_client: SigninCodeClient,
        sanitizer: HtmlSanitizer,
    ) -> Self {
        Self {
            db,
            signincode_client,
            sanitizer,
        }
    }
}
