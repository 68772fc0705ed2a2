//! The session gate.
//!
//! A session is valid when it holds an identity whose fixed window is still open. An
//! identity found past its window is flushed from the store on sight, so an expired session
//! behaves exactly like an anonymous one from then on.

use chrono::{DateTime, Utc};
use tower_sessions::Session;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, Error},
        model::session::user::SessionUser,
    },
};

/// Returns the identity held by the session, if any is still valid at `now`.
pub async fn current_user_at(
    session: &Session,
    now: DateTime<Utc>,
) -> Result<Option<SessionUser>, Error> {
    let Some(user) = SessionUser::get(session).await? else {
        return Ok(None);
    };

    if user.is_expired_at(now) {
        tracing::debug!(
            role = %user.role,
            username = %user.username,
            "Session expired, flushing"
        );
        session.flush().await?;

        return Ok(None);
    }

    Ok(Some(user))
}

pub async fn current_user(session: &Session) -> Result<Option<SessionUser>, Error> {
    current_user_at(session, Utc::now()).await
}

/// Requires a valid session of any role.
///
/// # Returns
/// - `Ok(SessionUser)` - The caller's identity
/// - `Err(Error::AuthError(AuthError::Unauthorized))` - No session, or it has expired
pub async fn require_session(session: &Session) -> Result<SessionUser, Error> {
    current_user(session)
        .await?
        .ok_or_else(|| AuthError::Unauthorized.into())
}

/// Requires a valid session holding exactly `role`.
pub async fn require_role(session: &Session, role: Role) -> Result<SessionUser, Error> {
    require_role_at(session, role, Utc::now()).await
}

/// Requires a valid session holding exactly `role`, judging expiry at `now`.
///
/// # Returns
/// - `Ok(SessionUser)` - The caller's identity
/// - `Err(Error::AuthError(AuthError::Unauthorized))` - No session, an expired one, or one
///   holding a different role
pub async fn require_role_at(
    session: &Session,
    role: Role,
    now: DateTime<Utc>,
) -> Result<SessionUser, Error> {
    let Some(user) = current_user_at(session, now).await? else {
        tracing::debug!(required = %role, "Rejected request without a valid session");
        return Err(AuthError::Unauthorized.into());
    };

    if user.role != role {
        tracing::debug!(
            required = %role,
            role = %user.role,
            username = %user.username,
            "Rejected request for a session with the wrong role"
        );
        return Err(AuthError::Unauthorized.into());
    }

    Ok(user)
}
