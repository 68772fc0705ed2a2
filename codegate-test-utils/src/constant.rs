//! Credential constants shared by fixtures and tests.
//!
//! None of these are real credentials.

/// Username of the admin record created by [`TestBuilder::with_admin`](crate::TestBuilder::with_admin).
pub static TEST_ADMIN_USERNAME: &str = "admin";

/// Plain password for the test admin.
pub static TEST_ADMIN_PASSWORD: &str = "admin123";

/// Plain password used for test signin users.
pub static TEST_USER_PASSWORD: &str = "demo123";

/// Shared password the mock signin-code source expects in the form body.
pub static TEST_SIGNINCODE_PASSWORD: &str = "atrok";
