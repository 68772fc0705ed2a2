//! Declarative test builder.
//!
//! Configuration methods are chained on `TestBuilder` and queued; tables, fixtures and mock
//! endpoints are created in that order during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{constant::TEST_SIGNINCODE_PASSWORD, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_store_tables: bool,

    // Database fixtures to insert
    admin: Option<(String, String)>, // (username, password)
    users: Vec<(String, String, bool)>, // (username, password, active)
    emails: Vec<String>,
    settings: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    signincode_endpoints: Vec<(String, String, usize)>, // (email, body, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_store_tables: false,
            admin: None,
            users: Vec::new(),
            emails: Vec::new(),
            settings: false,
            mock_builders: Vec::new(),
            signincode_endpoints: Vec::new(),
        }
    }

    /// Add every table the server persists to: settings, admin, signin users and the
    /// email whitelist.
    pub fn with_store_tables(mut self) -> Self {
        self.include_store_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the admin record with a hashed `password`.
    pub fn with_admin(mut self, username: &str, password: &str) -> Self {
        self.admin = Some((username.to_string(), password.to_string()));
        self
    }

    /// Insert a signin user with a hashed `password`.
    pub fn with_user(mut self, username: &str, password: &str, active: bool) -> Self {
        self.users
            .push((username.to_string(), password.to_string(), active));
        self
    }

    /// Insert an already normalized email into the whitelist.
    pub fn with_whitelisted_email(mut self, email: &str) -> Self {
        self.emails.push(email.to_string());
        self
    }

    /// Insert the settings row pointing at the mock server with the test signincode password.
    pub fn with_settings(mut self) -> Self {
        self.settings = true;
        self
    }

    /// Add a mock signin-code endpoint answering requests for `email` with `body`.
    ///
    /// # Arguments
    /// - `email` - Recipient email the request must carry
    /// - `body` - Raw HTML the mock source returns
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_signincode_endpoint(
        mut self,
        email: &str,
        body: &str,
        expected_requests: usize,
    ) -> Self {
        self.signincode_endpoints
            .push((email.to_string(), body.to_string(), expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// ```ignore
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server.mock("POST", "/").with_status(502).expect(1).create()
    ///     })
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test context, executing every queued operation.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHashError)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        if self.include_store_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Settings));
            tables.push(schema.create_table_from_entity(entity::prelude::Admin));
            tables.push(schema.create_table_from_entity(entity::prelude::SigninUser));
            tables.push(schema.create_table_from_entity(entity::prelude::WhitelistedEmail));
        }
        tables.extend(self.tables);
        setup.with_tables(tables).await?;

        // 2. Insert fixtures
        if let Some((username, password)) = self.admin {
            setup.account().insert_admin(&username, &password).await?;
        }

        for (username, password, active) in self.users {
            setup
                .account()
                .insert_user(&username, &password, active)
                .await?;
        }

        for email in self.emails {
            setup.whitelist().insert_email(&email).await?;
        }

        if self.settings {
            setup
                .settings()
                .insert_settings(TEST_SIGNINCODE_PASSWORD)
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (email, body, expected) in self.signincode_endpoints {
            mocks.push(
                setup
                    .signincode()
                    .create_signincode_endpoint(&email, &body, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
