//! Data access layer repositories.
//!
//! Repositories are thin structs borrowing a `ConnectionTrait`, so the same code runs against
//! a pooled connection or a transaction. They store exactly what they are given: email
//! normalisation, password hashing and input validation happen in the service layer.

pub mod admin;
pub mod email;
pub mod settings;
pub mod user;
