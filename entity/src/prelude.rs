pub use super::admin::Entity as Admin;
pub use super::settings::Entity as Settings;
pub use super::signin_user::Entity as SigninUser;
pub use super::whitelisted_email::Entity as WhitelistedEmail;
