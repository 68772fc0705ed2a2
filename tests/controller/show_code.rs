use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use codegate::{
    model::{api::ErrorDto, auth::Role, email::ShowCodeDto},
    server::controller::{show_code::show_code, util::json_body::JsonBody},
};
use codegate_test_utils::{fixtures::signincode::WRONG_PASSWORD_PAGE, prelude::*};

use crate::{
    util::{json_body, login_as, text_body},
    TestContextExt,
};

fn payload(email: &str) -> JsonBody<ShowCodeDto> {
    JsonBody(ShowCodeDto {
        email: Some(email.to_string()),
    })
}

/// Expect the sanitized page as HTML for a whitelisted email
#[tokio::test]
async fn returns_sanitized_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_settings()
        .with_whitelisted_email("foo@bar.com")
        .with_signincode_endpoint(
            "foo@bar.com",
            "<p>Code: 123</p><script>alert(1)</script>",
            1,
        )
        .build()
        .await?;
    login_as(&test, Role::User, "demo").await;

    let result = show_code(
        State(test.into_app_state()),
        test.session.clone(),
        payload("foo@bar.com"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    let html = text_body(resp).await;
    assert!(html.contains("<p>Code: 123</p>"));
    assert!(!html.contains("<script"));
    test.assert_mocks();

    Ok(())
}

/// Expect the whitelist check to pass for an address stored normalized
#[tokio::test]
async fn matches_whitelist_after_normalization() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_settings()
        .with_whitelisted_email("foo@bar.com")
        .with_signincode_endpoint("foo@bar.com", "<p>Code: 456</p>", 1)
        .build()
        .await?;
    login_as(&test, Role::User, "demo").await;

    let result = show_code(
        State(test.into_app_state()),
        test.session.clone(),
        payload("  FOO@Bar.com "),
    )
    .await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Expect 401 for an admin session
#[tokio::test]
async fn fails_for_admin_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_settings()
        .with_whitelisted_email("foo@bar.com")
        .with_signincode_endpoint("foo@bar.com", "<p>Code: 123</p>", 0)
        .build()
        .await?;
    login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

    let result = show_code(
        State(test.into_app_state()),
        test.session.clone(),
        payload("foo@bar.com"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}

/// Expect 403 "Email not activated" without contacting the source
#[tokio::test]
async fn fails_for_email_not_whitelisted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_settings()
        .with_signincode_endpoint("foo@bar.com", "<p>Code: 123</p>", 0)
        .build()
        .await?;
    login_as(&test, Role::User, "demo").await;

    let result = show_code(
        State(test.into_app_state()),
        test.session.clone(),
        payload("foo@bar.com"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Email not activated");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn fails_for_missing_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_settings()
        .build()
        .await?;
    login_as(&test, Role::User, "demo").await;

    let result = show_code(
        State(test.into_app_state()),
        test.session.clone(),
        JsonBody(ShowCodeDto { email: None }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Missing email");

    Ok(())
}

/// Expect 401 with the settings hint when the source rejects the signincode password
#[tokio::test]
async fn fails_for_wrong_signincode_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_settings()
        .with_whitelisted_email("foo@bar.com")
        .with_signincode_endpoint("foo@bar.com", WRONG_PASSWORD_PAGE, 1)
        .build()
        .await?;
    login_as(&test, Role::User, "demo").await;

    let result = show_code(
        State(test.into_app_state()),
        test.session.clone(),
        payload("foo@bar.com"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Wrong signincode password (Admin > Settings)");
    test.assert_mocks();

    Ok(())
}

/// Expect a generic 500 when the source cannot be reached
#[tokio::test]
async fn fails_with_generic_error_when_source_unreachable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_whitelisted_email("foo@bar.com")
        .build()
        .await?;
    test.settings()
        .insert_settings_with_url("http://127.0.0.1:9/", TEST_SIGNINCODE_PASSWORD)
        .await?;
    login_as(&test, Role::User, "demo").await;

    let result = show_code(
        State(test.into_app_state()),
        test.session.clone(),
        payload("foo@bar.com"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Failed to fetch the signin code page");

    Ok(())
}
