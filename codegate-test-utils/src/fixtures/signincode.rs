//! Mock signin-code source endpoints.
//!
//! The mock answers the form POST the server sends to the source URL. Matching on the form
//! body lets a test tell requests for different recipients apart.

use mockito::{Matcher, Mock};

use crate::{constant::TEST_SIGNINCODE_PASSWORD, TestContext};

/// Page the source returns when the shared password is rejected.
pub static WRONG_PASSWORD_PAGE: &str =
    "<html><body><form><label>Enter Password to Access</label><input name=\"password\"></form></body></html>";

impl TestContext {
    pub fn signincode<'a>(&'a mut self) -> SigninCodeFixtures<'a> {
        SigninCodeFixtures { setup: self }
    }
}

pub struct SigninCodeFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SigninCodeFixtures<'a> {
    /// Create a mock endpoint answering the signin-code request for `email`.
    ///
    /// The mock only matches a form POST carrying the test signincode password and `email`
    /// as recipient, and verifies it was called exactly `expected_requests` times.
    pub fn create_signincode_endpoint(
        &mut self,
        email: &str,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("password".into(), TEST_SIGNINCODE_PASSWORD.into()),
                Matcher::UrlEncoded("recipient_email".into(), email.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
