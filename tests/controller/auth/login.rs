use axum::{extract::State, http::StatusCode, response::IntoResponse};
use codegate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, Role},
    },
    server::{
        controller::{auth::login, util::json_body::JsonBody},
        model::session::user::SessionUser,
    },
};
use codegate_test_utils::prelude::*;

use crate::{util::json_body, TestContextExt};

fn payload(role: &str, username: &str, password: &str) -> JsonBody<LoginDto> {
    JsonBody(LoginDto {
        role: Some(role.to_string()),
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    })
}

/// Expect 200 and an admin identity in session for valid admin credentials
#[tokio::test]
async fn logs_in_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_admin(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        payload("admin", TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.username, TEST_ADMIN_USERNAME);

    Ok(())
}

/// Expect 200 for an active user, with surrounding whitespace trimmed from the username
#[tokio::test]
async fn logs_in_active_user_with_trimmed_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_user("demo", TEST_USER_PASSWORD, true)
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        payload("user", "  demo ", TEST_USER_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let user = SessionUser::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.username, "demo");

    Ok(())
}

/// Expect 400 "Missing fields" when the password is absent
#[tokio::test]
async fn fails_for_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        JsonBody(LoginDto {
            role: Some("user".to_string()),
            username: Some("demo".to_string()),
            password: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Missing fields");

    Ok(())
}

#[tokio::test]
async fn fails_for_invalid_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        payload("superuser", "demo", TEST_USER_PASSWORD),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Invalid role");

    Ok(())
}

/// Expect 401 "Invalid admin" for a username other than the admin's
#[tokio::test]
async fn fails_for_wrong_admin_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_admin(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        payload("admin", "root", TEST_ADMIN_PASSWORD),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Invalid admin");

    Ok(())
}

/// Expect 401 "Wrong password" and no identity in session
#[tokio::test]
async fn fails_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_user("demo", TEST_USER_PASSWORD, true)
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        payload("user", "demo", "not-the-password"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Wrong password");
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        payload("user", "ghost", TEST_USER_PASSWORD),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}

/// Expect 403 "User not active" for correct credentials on an inactive account
#[tokio::test]
async fn fails_for_inactive_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_user("demo", TEST_USER_PASSWORD, false)
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        payload("user", "demo", TEST_USER_PASSWORD),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "User not active");

    Ok(())
}
