//! Admin-only endpoints: settings, admin password, user accounts and the email whitelist.
//!
//! Every handler here requires a session holding the admin role.

pub mod emails;
pub mod settings;
pub mod users;

pub static ADMIN_TAG: &str = "admin";
