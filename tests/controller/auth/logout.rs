use axum::{http::StatusCode, response::IntoResponse};
use codegate::{
    model::auth::Role,
    server::{controller::auth::logout, model::session::user::SessionUser},
};
use codegate_test_utils::prelude::*;

use crate::util::login_as;

/// Expect 200 and the identity cleared from session
#[tokio::test]
async fn clears_session_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test, Role::User, "demo").await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 200 even when nobody is logged in
#[tokio::test]
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
