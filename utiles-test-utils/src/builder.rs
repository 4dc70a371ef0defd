//! Declarative test builder.
//!
//! `TestBuilder` queues table creation and fixtures; everything runs in order during the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete
/// test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    regions: Vec<i32>,
    comunas: Vec<(i32, i32)>, // (comuna_id, region_id)
    school_lists: Vec<i32>,
    assignments: Vec<(i32, i32)>, // (list_id, comuna_id)
    products: Vec<String>,        // shopify_ids
    list_products: Vec<(i32, String, i32)>, // (list_id, shopify_id, quantity)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            regions: Vec::new(),
            comunas: Vec::new(),
            school_lists: Vec::new(),
            assignments: Vec::new(),
            products: Vec::new(),
            list_products: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    ///
    /// Creates Region, Comuna, SchoolList, ListAssignment, Product and ListProduct in
    /// foreign key order.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use utiles_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), utiles_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Region)
    ///     .with_table(Comuna)
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

    /// Insert a mock region.
    pub fn with_mock_region(mut self, region_id: i32) -> Self {
        self.regions.push(region_id);
        self
    }

    /// Insert a mock commune, creating its region if needed.
    pub fn with_mock_comuna(mut self, comuna_id: i32, region_id: i32) -> Self {
        self.comunas.push((comuna_id, region_id));
        self
    }

    /// Insert a mock school list.
    pub fn with_mock_school_list(mut self, list_id: i32) -> Self {
        self.school_lists.push(list_id);
        self
    }

    /// Assign a list to a commune. Calling this twice with the same pair creates a duplicate row.
    pub fn with_list_assignment(mut self, list_id: i32, comuna_id: i32) -> Self {
        self.assignments.push((list_id, comuna_id));
        self
    }

    /// Insert a mock product.
    pub fn with_mock_product(mut self, shopify_id: impl Into<String>) -> Self {
        self.products.push(shopify_id.into());
        self
    }

    /// Insert a list line, creating the product if needed. The list must be queued first.
    pub fn with_list_product(
        mut self,
        list_id: i32,
        shopify_id: impl Into<String>,
        quantity: i32,
    ) -> Self {
        self.list_products
            .push((list_id, shopify_id.into(), quantity));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog tables if requested, then custom tables)
    /// 2. Inserts fixtures (regions, communes, lists, assignments, products, list lines)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Region),
                schema.create_table_from_entity(entity::prelude::Comuna),
                schema.create_table_from_entity(entity::prelude::SchoolList),
                schema.create_table_from_entity(entity::prelude::ListAssignment),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::ListProduct),
            ]);
        }

        all_tables.extend(self.tables);

        if !all_tables.is_empty() {
            setup.with_tables(all_tables).await?;
        }

        // 2. Insert fixtures
        for region_id in self.regions {
            setup.catalog().insert_mock_region(region_id).await?;
        }

        for (comuna_id, region_id) in self.comunas {
            setup
                .catalog()
                .insert_mock_comuna(comuna_id, region_id)
                .await?;
        }

        for list_id in self.school_lists {
            setup.catalog().insert_mock_school_list(list_id).await?;
        }

        for (list_id, comuna_id) in self.assignments {
            setup
                .catalog()
                .insert_list_assignment(list_id, comuna_id)
                .await?;
        }

        for shopify_id in self.products {
            setup.catalog().insert_mock_product(&shopify_id).await?;
        }

        for (list_id, shopify_id, quantity) in self.list_products {
            setup
                .catalog()
                .insert_list_product(list_id, &shopify_id, quantity)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
