use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use codegate::{
    model::{
        api::ErrorDto,
        auth::Role,
        email::{AddEmailDto, EmailsDto},
    },
    server::controller::{
        admin::emails::{add_email, list_emails, remove_email},
        util::json_body::JsonBody,
    },
};
use codegate_test_utils::prelude::*;

use crate::{
    util::{json_body, login_as},
    TestContextExt,
};

mod list_emails {
    use super::*;

    /// Expect the whitelist in insertion order
    #[tokio::test]
    async fn lists_in_insertion_order() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_whitelisted_email("zed@bar.com")
            .with_whitelisted_email("amy@bar.com")
            .build()
            .await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = list_emails(State(test.into_app_state()), test.session.clone()).await;

        assert!(result.is_ok());
        let body: EmailsDto = json_body(result.unwrap().into_response()).await;
        assert_eq!(body.emails, vec!["zed@bar.com", "amy@bar.com"]);

        Ok(())
    }

    #[tokio::test]
    async fn fails_for_user_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        login_as(&test, Role::User, "demo").await;

        let result = list_emails(State(test.into_app_state()), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod add_email {
    use super::*;

    /// Expect the address stored trimmed and lowercased, once
    #[tokio::test]
    async fn normalizes_and_deduplicates() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_whitelisted_email("foo@bar.com")
            .build()
            .await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = add_email(
            State(test.into_app_state()),
            test.session.clone(),
            JsonBody(AddEmailDto {
                email: Some(" Foo@Bar.com ".to_string()),
            }),
        )
        .await;

        assert!(result.is_ok());
        let body: EmailsDto = json_body(result.unwrap().into_response()).await;
        assert_eq!(body.emails, vec!["foo@bar.com"]);

        Ok(())
    }

    /// Expect 400 "Missing email" without an email
    #[tokio::test]
    async fn fails_for_missing_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = add_email(
            State(test.into_app_state()),
            test.session.clone(),
            JsonBody(AddEmailDto { email: None }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = json_body(resp).await;
        assert_eq!(body.error, "Missing email");

        Ok(())
    }
}

mod remove_email {
    use super::*;

    /// Expect the matching address removed regardless of case in the path
    #[tokio::test]
    async fn removes_normalized_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_whitelisted_email("foo@bar.com")
            .with_whitelisted_email("baz@bar.com")
            .build()
            .await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = remove_email(
            State(test.into_app_state()),
            test.session.clone(),
            Path("FOO@bar.com".to_string()),
        )
        .await;

        assert!(result.is_ok());
        let body: EmailsDto = json_body(result.unwrap().into_response()).await;
        assert_eq!(body.emails, vec!["baz@bar.com"]);

        Ok(())
    }
}
