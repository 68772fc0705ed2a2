use sea_orm::ConnectionTrait;

use crate::{
    model::user::{CreateUserDto, UpdateAdminPasswordDto, UpdateUserDto, UserDto},
    server::{
        data::{admin::AdminRepository, user::UserRepository},
        error::{admin::AdminError, Error},
        util::password::hash_password,
    },
};

/// Service for admin management of credentials.
///
/// Plain passwords are hashed here and never stored or logged.
pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).list().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Creates a user, or replaces the password and active flag of an existing one.
    ///
    /// The username is trimmed; `active` defaults to `false` when omitted.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The stored user
    /// - `Err(Error::AdminError)` - Username or password missing
    pub async fn create(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        let username = payload.username.as_deref().unwrap_or_default().trim();
        let password = payload.password.as_deref().unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            return Err(AdminError::MissingFields.into());
        }

        let password_hash = hash_password(password).await?;
        let user = UserRepository::new(self.db)
            .upsert(username, password_hash, payload.active.unwrap_or(false))
            .await?;

        tracing::info!(username = %user.username, active = user.active, "User saved");

        Ok(user.into())
    }

    /// Applies a partial update to an existing user.
    ///
    /// `active` changes only when provided; the password only when a non-empty one is
    /// provided.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(Error::AdminError(AdminError::UserNotFound))` - No user with `username`
    pub async fn update(
        &self,
        username: &str,
        payload: UpdateUserDto,
    ) -> Result<UserDto, Error> {
        let password_hash = match payload.password.as_deref() {
            Some(password) if !password.is_empty() => Some(hash_password(password).await?),
            _ => None,
        };

        let user = UserRepository::new(self.db)
            .update(username, password_hash, payload.active)
            .await?
            .ok_or_else(|| AdminError::UserNotFound(username.to_string()))?;

        tracing::info!(username = %user.username, active = user.active, "User updated");

        Ok(user.into())
    }

    /// Deletes a user; deleting an unknown username is not an error.
    pub async fn delete(&self, username: &str) -> Result<(), Error> {
        let result = UserRepository::new(self.db).delete(username).await?;

        if result.rows_affected > 0 {
            tracing::info!(username = %username, "User deleted");
        }

        Ok(())
    }

    /// Replaces the admin password.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(Error::AdminError)` - Password missing or empty
    /// - `Err(Error::InternalError)` - The admin record has not been seeded
    pub async fn update_admin_password(
        &self,
        payload: UpdateAdminPasswordDto,
    ) -> Result<(), Error> {
        let password = payload.password.as_deref().unwrap_or_default();
        if password.is_empty() {
            return Err(AdminError::MissingFields.into());
        }

        let password_hash = hash_password(password).await?;
        let admin = AdminRepository::new(self.db)
            .set_password_hash(password_hash)
            .await?
            .ok_or_else(|| {
                Error::InternalError("Admin record has not been seeded".to_string())
            })?;

        tracing::info!(username = %admin.username, "Admin password changed");

        Ok(())
    }
}

impl From<entity::signin_user::Model> for UserDto {
    fn from(user: entity::signin_user::Model) -> Self {
        Self {
            username: user.username,
            active: user.active,
        }
    }
}
