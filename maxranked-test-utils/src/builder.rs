//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// company fixtures, and mock HTTP endpoints. Methods can be chained together and
/// finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_company_tables: bool,
    include_submission_tables: bool,

    // Database fixtures to insert
    companies: Vec<(i32, String, i64, i64)>, // (id, name, vote_up, vote_down)
    hierarchy_edges: Vec<(i32, i32)>,        // (parent_id, child_id)
    regional_votes: Vec<(i32, i64, i64)>,    // (company_id, vote_up, vote_down)
    assets: Vec<(i32, String)>,              // (company_id, name)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    geo_endpoints: Vec<(String, Option<String>, Option<String>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_company_tables: false,
            include_submission_tables: false,
            companies: Vec::new(),
            hierarchy_edges: Vec::new(),
            regional_votes: Vec::new(),
            assets: Vec::new(),
            mock_builders: Vec::new(),
            geo_endpoints: Vec::new(),
        }
    }

    /// Add the live company tables to the test database.
    ///
    /// Creates Company, CompanyHierarchy, CompanyRegionVote, and BrandAsset along with the
    /// unique `(parent_id, child_id)` hierarchy index.
    pub fn with_company_tables(mut self) -> Self {
        self.include_company_tables = true;
        self
    }

    /// Add the moderation queue tables to the test database.
    ///
    /// Creates PendingCompany, PendingAsset, PendingHierarchy, and PendingVote along with the
    /// unique vote index. Implies `with_company_tables` since pending hierarchies and votes
    /// reference companies.
    pub fn with_submission_tables(mut self) -> Self {
        self.include_company_tables = true;
        self.include_submission_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use maxranked_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), maxranked_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Company)
    ///     .with_table(BrandAsset)
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

    /// Insert a mock company with the provided global vote counters.
    pub fn with_mock_company(
        mut self,
        company_id: i32,
        name: impl Into<String>,
        vote_up: i64,
        vote_down: i64,
    ) -> Self {
        self.companies
            .push((company_id, name.into(), vote_up, vote_down));
        self
    }

    /// Insert a parent -> child hierarchy edge.
    ///
    /// Both companies must be added via `with_mock_company` first.
    pub fn with_hierarchy_edge(mut self, parent_id: i32, child_id: i32) -> Self {
        self.hierarchy_edges.push((parent_id, child_id));
        self
    }

    /// Insert the regional vote record for a company.
    pub fn with_regional_votes(mut self, company_id: i32, vote_up: i64, vote_down: i64) -> Self {
        self.regional_votes.push((company_id, vote_up, vote_down));
        self
    }

    /// Insert a brand/asset owned by a company.
    pub fn with_asset(mut self, company_id: i32, name: impl Into<String>) -> Self {
        self.assets.push((company_id, name.into()));
        self
    }

    /// Add a mock geolocation endpoint at `/{ip}/json/`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_geo_endpoint(
        mut self,
        ip: impl Into<String>,
        country: Option<&str>,
        region: Option<&str>,
        expected_requests: usize,
    ) -> Self {
        self.geo_endpoints.push((
            ip.into(),
            country.map(str::to_string),
            region.map(str::to_string),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables and indexes
    /// 2. Inserts database fixtures (companies, edges, regional votes, assets)
    /// 3. Creates mock HTTP endpoints
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();
        let mut all_indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_company_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Company),
                schema.create_table_from_entity(entity::prelude::CompanyHierarchy),
                schema.create_table_from_entity(entity::prelude::CompanyRegionVote),
                schema.create_table_from_entity(entity::prelude::BrandAsset),
            ]);
            all_indexes.push(
                Index::create()
                    .name("idx-company_hierarchy-parent_id-child_id")
                    .table(entity::prelude::CompanyHierarchy)
                    .col(entity::company_hierarchy::Column::ParentId)
                    .col(entity::company_hierarchy::Column::ChildId)
                    .unique()
                    .to_owned(),
            );
        }

        if self.include_submission_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PendingCompany),
                schema.create_table_from_entity(entity::prelude::PendingAsset),
                schema.create_table_from_entity(entity::prelude::PendingHierarchy),
                schema.create_table_from_entity(entity::prelude::PendingVote),
            ]);
            all_indexes.push(
                Index::create()
                    .name("idx-pending_vote-company_id-voter_key-vote_window")
                    .table(entity::prelude::PendingVote)
                    .col(entity::pending_vote::Column::CompanyId)
                    .col(entity::pending_vote::Column::VoterKey)
                    .col(entity::pending_vote::Column::VoteWindow)
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables, all_indexes).await?;

        // 2. Insert database fixtures
        for (company_id, name, vote_up, vote_down) in self.companies {
            setup
                .company()
                .insert_mock_company(company_id, &name, vote_up, vote_down)
                .await?;
        }

        for (parent_id, child_id) in self.hierarchy_edges {
            setup
                .company()
                .insert_hierarchy_edge(parent_id, child_id)
                .await?;
        }

        for (company_id, vote_up, vote_down) in self.regional_votes {
            setup
                .company()
                .insert_regional_votes(company_id, vote_up, vote_down)
                .await?;
        }

        for (company_id, name) in self.assets {
            setup.company().insert_asset(company_id, &name).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can queue an error response ahead of
        // a success response for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (ip, country, region, expected) in self.geo_endpoints {
            mocks.push(setup.geo().create_geo_endpoint(
                &ip,
                country.as_deref(),
                region.as_deref(),
                expected,
            ));
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
