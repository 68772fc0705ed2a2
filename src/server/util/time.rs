//! Time arithmetic for the fixed session window.

use chrono::{DateTime, Duration, Utc};

use crate::server::error::Error;

/// Sessions live for a fixed window measured from login, never extended by activity.
pub const SESSION_TTL_HOURS: i64 = 8;

/// Returns the instant a session created at `created_at` stops being valid.
pub fn session_expires_at(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::hours(SESSION_TTL_HOURS)
}

/// Converts a chrono timestamp into the `time` representation used by tower-sessions.
pub fn to_offset_date_time(instant: DateTime<Utc>) -> Result<time::OffsetDateTime, Error> {
    time::OffsetDateTime::from_unix_timestamp(instant.timestamp()).map_err(|e| {
        Error::ParseError(format!(
            "Failed to convert session expiry timestamp {}: {}",
            instant, e
        ))
    })
}
