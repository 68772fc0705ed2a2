//! Helpers shared by the integration tests.

use std::time::Duration;

use axum::{body::to_bytes, response::Response};
use chrono::Utc;
use codegate::{
    model::auth::Role,
    server::{
        client::SigninCodeClient,
        model::{app::AppState, session::user::SessionUser},
        sanitize::HtmlSanitizer,
    },
};
use codegate_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let client = SigninCodeClient::new(Duration::from_secs(5))
            .expect("Failed to build signin-code client");

        AppState::new(self.db.clone(), client, HtmlSanitizer::default())
    }
}

/// Binds an identity with `role` to the test session, as a successful login would
pub async fn login_as(test: &TestContext, role: Role, username: &str) {
    let user = SessionUser::new(role, username, Utc::now());

    SessionUser::insert(&test.session, &user)
        .await
        .expect("Failed to insert session user");
}

/// Reads a JSON response body into `T`
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}

/// Reads a response body as text
pub async fn text_body(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}
