//! Test fixture modules for database rows and HTTP mocks.
//!
//! - `account` - admin and signin user records
//! - `settings` - the singleton settings row, pointed at the mock server
//! - `signincode` - mock signin-code source endpoints
//! - `whitelist` - whitelisted email records

pub mod account;
pub mod settings;
pub mod signincode;
pub mod whitelist;
