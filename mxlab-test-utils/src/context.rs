//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database with whatever tables and fixtures the builder was asked for.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// test.model().insert_mock_model("Valve").await?;
/// test.equipment().insert_mock_equipment("Valve", "T1").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context backed by a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
