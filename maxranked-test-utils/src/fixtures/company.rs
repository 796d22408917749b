//! Company database insertion utilities.
//!
//! Inserts live-table records with explicit identifiers so tests can describe hierarchies
//! by id (e.g. `1 -> 2 -> 3`).

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{BrandAssetModel, CompanyHierarchyModel, CompanyModel, CompanyRegionVoteModel},
    TestContext,
};

impl TestContext {
    pub fn company<'a>(&'a self) -> CompanyFixtures<'a> {
        CompanyFixtures { setup: self }
    }
}

pub struct CompanyFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CompanyFixtures<'a> {
    /// Insert a company with no location and the provided global vote counters.
    ///
    /// # Returns
    /// - `Ok(CompanyModel)` - The created company record
    /// - `Err(TestError::DbErr)` - Insert failed (e.g. duplicate id or missing table)
    pub async fn insert_mock_company(
        &self,
        company_id: i32,
        name: &str,
        vote_up: i64,
        vote_down: i64,
    ) -> Result<CompanyModel, TestError> {
        self.insert_mock_company_with_location(company_id, name, None, None, vote_up, vote_down)
            .await
    }

    /// Insert a company with an explicit country and region.
    pub async fn insert_mock_company_with_location(
        &self,
        company_id: i32,
        name: &str,
        country: Option<&str>,
        region: Option<&str>,
        vote_up: i64,
        vote_down: i64,
    ) -> Result<CompanyModel, TestError> {
        Ok(
            entity::prelude::Company::insert(entity::company::ActiveModel {
                id: ActiveValue::Set(company_id),
                name: ActiveValue::Set(name.to_string()),
                country: ActiveValue::Set(country.map(str::to_string)),
                region: ActiveValue::Set(region.map(str::to_string)),
                vote_up: ActiveValue::Set(vote_up),
                vote_down: ActiveValue::Set(vote_down),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a parent -> child hierarchy edge between two existing companies.
    pub async fn insert_hierarchy_edge(
        &self,
        parent_id: i32,
        child_id: i32,
    ) -> Result<CompanyHierarchyModel, TestError> {
        Ok(
            entity::prelude::CompanyHierarchy::insert(entity::company_hierarchy::ActiveModel {
                parent_id: ActiveValue::Set(parent_id),
                child_id: ActiveValue::Set(child_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the regional vote record for an existing company.
    pub async fn insert_regional_votes(
        &self,
        company_id: i32,
        vote_up: i64,
        vote_down: i64,
    ) -> Result<CompanyRegionVoteModel, TestError> {
        Ok(
            entity::prelude::CompanyRegionVote::insert(entity::company_region_vote::ActiveModel {
                company_id: ActiveValue::Set(company_id),
                vote_up: ActiveValue::Set(vote_up),
                vote_down: ActiveValue::Set(vote_down),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a brand/asset owned by an existing company.
    pub async fn insert_asset(
        &self,
        company_id: i32,
        name: &str,
    ) -> Result<BrandAssetModel, TestError> {
        Ok(
            entity::prelude::BrandAsset::insert(entity::brand_asset::ActiveModel {
                company_id: ActiveValue::Set(company_id),
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
