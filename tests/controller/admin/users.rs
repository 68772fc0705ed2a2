use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use codegate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, Role},
        user::{CreateUserDto, UpdateUserDto, UserDto, UsersDto},
    },
    server::{
        controller::{
            admin::users::{create_user, delete_user, list_users, update_user},
            auth::login,
            util::json_body::JsonBody,
        },
        data::user::UserRepository,
        util::password::verify_password,
    },
};
use codegate_test_utils::prelude::*;

use crate::{
    util::{json_body, login_as},
    TestContextExt,
};

mod list_users {
    use super::*;

    /// Expect every user without password hashes
    #[tokio::test]
    async fn lists_users_for_admin() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_user("demo", TEST_USER_PASSWORD, true)
            .with_user("guest", TEST_USER_PASSWORD, false)
            .build()
            .await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = list_users(State(test.into_app_state()), test.session.clone()).await;

        assert!(result.is_ok());
        let body: UsersDto = json_body(result.unwrap().into_response()).await;
        assert!(body.ok);
        assert_eq!(
            body.users,
            vec![
                UserDto {
                    username: "demo".to_string(),
                    active: true
                },
                UserDto {
                    username: "guest".to_string(),
                    active: false
                },
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_for_user_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        login_as(&test, Role::User, "demo").await;

        let result = list_users(State(test.into_app_state()), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod create_user {
    use super::*;

    /// Expect a new inactive user when `active` is omitted
    #[tokio::test]
    async fn creates_inactive_user_by_default() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = create_user(
            State(test.into_app_state()),
            test.session.clone(),
            JsonBody(CreateUserDto {
                username: Some("demo".to_string()),
                password: Some(TEST_USER_PASSWORD.to_string()),
                active: None,
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let user = UserRepository::new(&test.db).get("demo").await?.unwrap();
        assert!(!user.active);
        assert!(verify_password(TEST_USER_PASSWORD, &user.password_hash).await.unwrap());

        Ok(())
    }

    /// Expect an existing username to have its password and active flag replaced
    #[tokio::test]
    async fn replaces_existing_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_user("demo", TEST_USER_PASSWORD, false)
            .build()
            .await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        create_user(
            State(test.into_app_state()),
            test.session.clone(),
            JsonBody(CreateUserDto {
                username: Some("demo".to_string()),
                password: Some("replaced".to_string()),
                active: Some(true),
            }),
        )
        .await
        .unwrap();

        let users = UserRepository::new(&test.db).list().await?;
        assert_eq!(users.len(), 1);
        assert!(users[0].active);
        assert!(verify_password("replaced", &users[0].password_hash).await.unwrap());

        Ok(())
    }

    /// Expect 400 "Missing fields" without a password
    #[tokio::test]
    async fn fails_for_missing_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = create_user(
            State(test.into_app_state()),
            test.session.clone(),
            JsonBody(CreateUserDto {
                username: Some("demo".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = json_body(resp).await;
        assert_eq!(body.error, "Missing fields");

        Ok(())
    }
}

mod update_user {
    use super::*;

    /// Expect the active flag to change while the password stays the same
    #[tokio::test]
    async fn updates_active_flag_only() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_user("demo", TEST_USER_PASSWORD, false)
            .build()
            .await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = update_user(
            State(test.into_app_state()),
            test.session.clone(),
            Path("demo".to_string()),
            JsonBody(UpdateUserDto {
                password: Some(String::new()),
                active: Some(true),
            }),
        )
        .await;

        assert!(result.is_ok());
        let user = UserRepository::new(&test.db).get("demo").await?.unwrap();
        assert!(user.active);
        assert!(verify_password(TEST_USER_PASSWORD, &user.password_hash).await.unwrap());

        Ok(())
    }

    /// Expect 404 "User not found" for an unknown username
    #[tokio::test]
    async fn fails_for_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = update_user(
            State(test.into_app_state()),
            test.session.clone(),
            Path("ghost".to_string()),
            JsonBody(UpdateUserDto {
                password: None,
                active: Some(true),
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorDto = json_body(resp).await;
        assert_eq!(body.error, "User not found");

        Ok(())
    }
}

mod delete_user {
    use super::*;

    /// Expect the user gone from the listing and unable to log in afterwards
    #[tokio::test]
    async fn deleted_user_cannot_log_in() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_user("demo", TEST_USER_PASSWORD, true)
            .build()
            .await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;
        let state = test.into_app_state();

        let result = delete_user(
            State(state.clone()),
            test.session.clone(),
            Path("demo".to_string()),
        )
        .await;
        assert!(result.is_ok());

        let listed: UsersDto = json_body(
            list_users(State(state.clone()), test.session.clone())
                .await
                .unwrap()
                .into_response(),
        )
        .await;
        assert!(listed.users.is_empty());

        let login_result = login(
            State(state),
            test.session.clone(),
            JsonBody(LoginDto {
                role: Some("user".to_string()),
                username: Some("demo".to_string()),
                password: Some(TEST_USER_PASSWORD.to_string()),
            }),
        )
        .await;
        let resp = login_result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorDto = json_body(resp).await;
        assert_eq!(body.error, "User not found");

        Ok(())
    }

    /// Expect success for a username that does not exist
    #[tokio::test]
    async fn succeeds_for_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        login_as(&test, Role::Admin, TEST_ADMIN_USERNAME).await;

        let result = delete_user(
            State(test.into_app_state()),
            test.session.clone(),
            Path("ghost".to_string()),
        )
        .await;

        assert!(result.is_ok());

        Ok(())
    }
}
