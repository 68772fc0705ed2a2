use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;

use crate::{
    model::auth::{LoginDto, Role},
    server::{
        data::{admin::AdminRepository, user::UserRepository},
        error::{auth::AuthError, Error},
        model::session::user::SessionUser,
        util::password::verify_password,
    },
};

/// Service verifying login credentials for both roles.
pub struct AuthService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Verifies a login request and returns the identity to store in the session.
    ///
    /// Checks run in a fixed order so each failure maps to one specific error: missing
    /// fields, then the role, then the role's own credential checks. For users the
    /// password is verified before the active flag, so an inactive account is only
    /// revealed to someone who knows its password.
    ///
    /// # Arguments
    /// - `payload` - Raw login body
    /// - `now` - Creation time of the session, the start of its fixed window
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Credentials verified
    /// - `Err(Error::AuthError)` - Missing fields, invalid role or rejected credentials
    /// - `Err(Error::InternalError)` - The admin record has not been seeded
    pub async fn login(
        &self,
        payload: LoginDto,
        now: DateTime<Utc>,
    ) -> Result<SessionUser, Error> {
        let (Some(role), Some(username), Some(password)) =
            (payload.role, payload.username, payload.password)
        else {
            return Err(AuthError::MissingFields.into());
        };
        if role.is_empty() || username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields.into());
        }

        let role: Role = role.parse().map_err(AuthError::InvalidRole)?;
        let username = username.trim();

        match role {
            Role::Admin => {
                let admin = AdminRepository::new(self.db)
                    .get()
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError("Admin record has not been seeded".to_string())
                    })?;

                if admin.username != username {
                    return Err(AuthError::InvalidAdmin(username.to_string()).into());
                }
                if !verify_password(&password, &admin.password_hash).await? {
                    return Err(AuthError::WrongPassword(role, admin.username).into());
                }

                Ok(SessionUser::new(role, admin.username, now))
            }
            Role::User => {
                let user = UserRepository::new(self.db)
                    .get(username)
                    .await?
                    .ok_or_else(|| AuthError::UserNotFound(username.to_string()))?;

                if !verify_password(&password, &user.password_hash).await? {
                    return Err(AuthError::WrongPassword(role, user.username).into());
                }
                if !user.active {
                    return Err(AuthError::UserNotActive(user.username).into());
                }

                Ok(SessionUser::new(role, user.username, now))
            }
        }
    }
}
