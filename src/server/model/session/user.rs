//! The authenticated identity held in a session.
//!
//! A session moves from anonymous to authenticated exactly once, at login, and carries a
//! single role for its whole lifetime. Expiry is a fixed window from creation: the cookie
//! and store record are given an absolute expiry, and the creation timestamp stored here
//! lets the session gate reject the session deterministically at the same instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::{Expiry, Session};

use crate::{
    model::auth::{Role, SessionUserDto},
    server::{
        error::Error,
        util::time::{session_expires_at, to_offset_date_time},
    },
};

pub const SESSION_USER_KEY: &str = "codegate:auth:user";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUser {
    pub role: Role,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl SessionUser {
    pub fn new(role: Role, username: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            role,
            username: username.into(),
            created_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        session_expires_at(self.created_at)
    }

    /// Whether the fixed session window has closed at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Stores the identity in the session and pins the session's expiry to the end of its
    /// fixed window.
    pub async fn insert(session: &Session, user: &SessionUser) -> Result<(), Error> {
        session.set_expiry(Some(Expiry::AtDateTime(to_offset_date_time(
            user.expires_at(),
        )?)));
        session.insert(SESSION_USER_KEY, user).await?;

        Ok(())
    }

    /// Reads the identity from the session without checking expiry.
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        let user = session.get(SESSION_USER_KEY).await?;

        Ok(user)
    }
}

impl From<SessionUser> for SessionUserDto {
    fn from(user: SessionUser) -> Self {
        Self {
            role: user.role,
            username: user.username,
        }
    }
}
