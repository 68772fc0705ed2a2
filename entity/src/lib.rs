//! sea-orm entities for the codegate record store.

pub mod prelude;

pub mod admin;
pub mod settings;
pub mod signin_user;
pub mod whitelisted_email;
