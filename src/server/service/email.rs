use sea_orm::ConnectionTrait;

use crate::server::{
    data::email::EmailRepository,
    error::{admin::AdminError, Error},
    util::email::normalize_email,
};

/// Service managing the email whitelist.
///
/// Every address is trimmed and lowercased before it reaches the store, for writes and
/// membership checks alike, so `" Foo@Bar.com "` and `"foo@bar.com"` are the same entry.
pub struct EmailService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmailService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<String>, Error> {
        Ok(EmailRepository::new(self.db).list().await?)
    }

    /// Adds an email and returns the updated whitelist.
    pub async fn add(&self, email: Option<&str>) -> Result<Vec<String>, Error> {
        let email = normalize_email(email.unwrap_or_default());
        if email.is_empty() {
            return Err(AdminError::MissingEmail.into());
        }

        let email_repo = EmailRepository::new(self.db);
        email_repo.add(&email).await?;

        tracing::info!(email = %email, "Email whitelisted");

        Ok(email_repo.list().await?)
    }

    /// Removes an email and returns the updated whitelist.
    ///
    /// Removing an address that is not whitelisted is not an error.
    pub async fn remove(&self, email: &str) -> Result<Vec<String>, Error> {
        let email = normalize_email(email);

        let email_repo = EmailRepository::new(self.db);
        if email_repo.remove(&email).await? {
            tracing::info!(email = %email, "Email removed from whitelist");
        }

        Ok(email_repo.list().await?)
    }

    /// Whether `email` is whitelisted, compared after normalisation.
    pub async fn is_whitelisted(&self, email: &str) -> Result<bool, Error> {
        let email = normalize_email(email);

        Ok(EmailRepository::new(self.db).contains(&email).await?)
    }
}
