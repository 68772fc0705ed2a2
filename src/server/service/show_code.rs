//! The show-code pipeline.
//!
//! A strict sequence: normalise the email, check the whitelist, load the current settings,
//! fetch the page once, detect the third party's wrong-password page, sanitise. Each stage
//! either advances or fails the whole request with one specific error. Nothing is shared
//! between concurrent invocations beyond reads of the settings row and the whitelist.

use sea_orm::ConnectionTrait;

use crate::server::{
    client::SigninCodeClient,
    error::{show_code::ShowCodeError, Error},
    sanitize::Sanitize,
    service::{email::EmailService, settings::SettingsService},
    util::email::normalize_email,
};

/// Text the signin-code source shows, in any case, when it rejects the shared password.
const WRONG_PASSWORD_SIGNATURE: &str = "enter password to access";

pub struct ShowCodeService<'a, C: ConnectionTrait, S: Sanitize> {
    db: &'a C,
    client: &'a SigninCodeClient,
    sanitizer: &'a S,
}

impl<'a, C: ConnectionTrait, S: Sanitize> ShowCodeService<'a, C, S> {
    pub fn new(db: &'a C, client: &'a SigninCodeClient, sanitizer: &'a S) -> Self {
        Self {
            db,
            client,
            sanitizer,
        }
    }

    /// Fetches the signin-code page for `email` and returns it sanitised.
    ///
    /// # Returns
    /// - `Ok(String)` - Sanitised HTML of the page
    /// - `Err(Error::ShowCodeError(MissingEmail))` - Email absent or blank
    /// - `Err(Error::ShowCodeError(EmailNotActivated))` - Email not whitelisted
    /// - `Err(Error::ShowCodeError(FetchFailed))` - The outbound request failed
    /// - `Err(Error::ShowCodeError(WrongSigninCodePassword))` - The source rejected the
    ///   shared password; the page is not sanitised
    /// - `Err(Error::InternalError)` - The settings row has not been seeded
    pub async fn show_code(&self, email: Option<&str>) -> Result<String, Error> {
        let email = normalize_email(email.unwrap_or_default());
        if email.is_empty() {
            return Err(ShowCodeError::MissingEmail.into());
        }

        if !EmailService::new(self.db).is_whitelisted(&email).await? {
            return Err(ShowCodeError::EmailNotActivated(email).into());
        }

        // Read per request so admin edits apply to the very next fetch
        let settings = SettingsService::new(self.db).get().await?;

        let raw = self
            .client
            .fetch_page(&settings, &email)
            .await
            .map_err(ShowCodeError::FetchFailed)?;

        if is_wrong_password_page(&raw) {
            return Err(ShowCodeError::WrongSigninCodePassword.into());
        }

        Ok(self.sanitizer.sanitize(&raw))
    }
}

fn is_wrong_password_page(raw: &str) -> bool {
    raw.to_ascii_lowercase().contains(WRONG_PASSWORD_SIGNATURE)
}
