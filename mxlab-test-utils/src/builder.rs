//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_tables: bool,

    // Database fixtures to insert, in the order they were queued
    models: Vec<String>,
    equipments: Vec<(String, String)>, // (model name, tag)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tables: false,
            models: Vec::new(),
            equipments: Vec::new(),
        }
    }

    /// Add the model and equipment tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_tables(mut self) -> Self {
        self.include_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mxlab_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), mxlab_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(ArModel)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock model with an empty tree into the database.
    ///
    /// # Arguments
    /// - `name` - Unique model name
    pub fn with_mock_model(mut self, name: &str) -> Self {
        self.models.push(name.to_string());
        self
    }

    /// Insert a mock equipment into the database.
    ///
    /// The referenced model is not created; queue it with `with_mock_model` if the test
    /// needs the equipment to resolve.
    ///
    /// # Arguments
    /// - `name` - Name of the model the tag points at
    /// - `tag` - Unique equipment tag
    pub fn with_mock_equipment(mut self, name: &str, tag: &str) -> Self {
        self.equipments.push((name.to_string(), tag.to_string()));
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// Tables are created first, then models, then equipment.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        if self.include_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::ArModel));
            tables.push(schema.create_table_from_entity(entity::prelude::ArEquipment));
        }
        tables.extend(self.tables);

        if !tables.is_empty() {
            context.with_tables(tables).await?;
        }

        // 2. Insert fixtures
        for name in self.models {
            context.model().insert_mock_model(&name).await?;
        }

        for (name, tag) in self.equipments {
            context.equipment().insert_mock_equipment(&name, &tag).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
