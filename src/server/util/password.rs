//! One-way credential hashing.
//!
//! Hashes are Argon2id PHC strings with a random per-password salt, so the salt and
//! parameters travel with the digest stored in the database. Argon2 is deliberately slow,
//! so both operations run on tokio's blocking pool instead of the async worker threads.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hashes `plain` into a salted PHC string.
pub async fn hash_password(plain: &str) -> Result<String, Error> {
    let plain = plain.to_owned();

    tokio::task::spawn_blocking(move || hash_blocking(&plain)).await?
}

/// Checks `plain` against a stored digest.
///
/// A digest that cannot be parsed never verifies.
pub async fn verify_password(plain: &str, digest: &str) -> Result<bool, Error> {
    let plain = plain.to_owned();
    let digest = digest.to_owned();

    let verified = tokio::task::spawn_blocking(move || verify_blocking(&plain, &digest)).await?;

    Ok(verified)
}

fn hash_blocking(plain: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

fn verify_blocking(plain: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}
