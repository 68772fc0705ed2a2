use axum::{extract::State, http::StatusCode, response::IntoResponse};
use codegate::{
    model::{auth::Role, email::EmailsDto},
    server::controller::email::list_emails,
};
use codegate_test_utils::prelude::*;

use crate::{
    util::{json_body, login_as},
    TestContextExt,
};

/// Expect a user session to see the whitelist
#[tokio::test]
async fn lists_emails_for_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_whitelisted_email("foo@bar.com")
        .build()
        .await?;
    login_as(&test, Role::User, "demo").await;

    let result = list_emails(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: EmailsDto = json_body(resp).await;
    assert!(body.ok);
    assert_eq!(body.emails, vec!["foo@bar.com"]);

    Ok(())
}

/// Expect an admin session to see the whitelist as well
#[tokio::test]
async fn lists_emails_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_whitelisted_email("foo@bar.com")
        .build()
        .await?;
    login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

    let result = list_emails(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
async fn fails_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = list_emails(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
