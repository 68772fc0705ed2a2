//! Small helpers shared across the server layers.
//!
//! Email normalisation, password hashing and the time arithmetic behind session expiry.

pub mod email;
pub mod password;
pub mod time;
