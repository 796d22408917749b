use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        company::CompanyDetailDto,
        hierarchy::{DescendantsDto, HierarchyRelationsDto, RelatedCompanyDto, VoteAggregateDto},
    },
    server::{
        data::{
            asset::AssetRepository, company::CompanyRepository, hierarchy::HierarchyRepository,
        },
        error::{company::CompanyError, Error},
        model::db::CompanyModel,
        service::{
            hierarchy::HierarchyAggregator,
            rank::{individual_rank, rank_label},
        },
    },
};

/// Location shown for companies ranked worldwide
pub const GLOBAL_LOCATION: &str = "Global";
/// Region value meaning the whole country
pub const ALL_REGIONS: &str = "All";

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of [`CompanyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a company with its brands and rolled-up vote figures.
    ///
    /// # Arguments
    /// - `company_id` - ID of the company to retrieve
    ///
    /// # Returns
    /// - `Ok(CompanyDetailDto)` - Company detail
    /// - `Err(Error::CompanyError)` - Company does not exist
    /// - `Err(Error::HierarchyError)` - Hierarchy below the company contains a cycle
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_company(&self, company_id: i32) -> Result<CompanyDetailDto, Error> {
        let company = self.require_company(company_id).await?;

        let assets = AssetRepository::new(self.db)
            .get_by_company_ids(&[company.id])
            .await?
            .into_iter()
            .map(|asset| asset.name)
            .collect();

        let votes = HierarchyAggregator::new(self.db)
            .aggregate_for_company(&company)
            .await?;

        Ok(CompanyDetailDto {
            location: location_label(company.country.as_deref(), company.region.as_deref()),
            id: company.id,
            name: company.name,
            country: company.country,
            region: company.region,
            assets,
            votes,
        })
    }

    /// Retrieves the vote aggregate of an existing company
    pub async fn get_votes(&self, company_id: i32) -> Result<VoteAggregateDto, Error> {
        HierarchyAggregator::new(self.db)
            .aggregate_votes(company_id)
            .await
    }

    /// Retrieves the IDs of every company beneath an existing company
    pub async fn get_descendants(&self, company_id: i32) -> Result<DescendantsDto, Error> {
        self.require_company(company_id).await?;

        let descendants = HierarchyAggregator::new(self.db)
            .resolve_descendants(company_id)
            .await?;

        Ok(DescendantsDto {
            company_id,
            descendants,
        })
    }

    /// Retrieves the direct parents and children of a company with their individual ranks.
    ///
    /// # Returns
    /// - `Ok(HierarchyRelationsDto)` - Related companies in edge order
    /// - `Err(Error::CompanyError)` - Company does not exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_relations(&self, company_id: i32) -> Result<HierarchyRelationsDto, Error> {
        self.require_company(company_id).await?;

        let edges = HierarchyRepository::new(self.db)
            .get_edges_for_company(company_id)
            .await?;

        let parent_ids: Vec<i32> = edges
            .iter()
            .filter(|edge| edge.child_id == company_id)
            .map(|edge| edge.parent_id)
            .collect();
        let child_ids: Vec<i32> = edges
            .iter()
            .filter(|edge| edge.parent_id == company_id)
            .map(|edge| edge.child_id)
            .collect();

        let related_ids: Vec<i32> = parent_ids.iter().chain(&child_ids).copied().collect();
        let related: HashMap<i32, CompanyModel> = CompanyRepository::new(self.db)
            .get_by_ids(&related_ids)
            .await?
            .into_iter()
            .map(|company| (company.id, company))
            .collect();

        let to_related = |ids: &[i32]| -> Vec<RelatedCompanyDto> {
            ids.iter()
                .filter_map(|id| related.get(id))
                .map(|company| {
                    let rank = individual_rank(company.vote_up, company.vote_down);
                    RelatedCompanyDto {
                        id: company.id,
                        name: company.name.clone(),
                        rank_percent: rank,
                        rank_label: rank_label(rank),
                    }
                })
                .collect()
        };

        Ok(HierarchyRelationsDto {
            company_id,
            parents: to_related(&parent_ids),
            children: to_related(&child_ids),
        })
    }

    async fn require_company(&self, company_id: i32) -> Result<CompanyModel, Error> {
        let company = CompanyRepository::new(self.db)
            .get_by_id(company_id)
            .await?
            .ok_or(CompanyError::NotFound(company_id))?;

        Ok(company)
    }
}

/// Formats where a company is ranked, e.g. `Global`, `Canada` or `Canada (Ontario)`
pub fn location_label(country: Option<&str>, region: Option<&str>) -> String {
    let country = country
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(GLOBAL_LOCATION);

    match region.map(str::trim) {
        Some(region) if !region.is_empty() && region != ALL_REGIONS => {
            format!("{} ({})", country, region)
        }
        _ => country.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use maxranked_test_utils::{
        constant::{TEST_COUNTRY, TEST_REGION},
        prelude::*,
    };

    use super::{location_label, CompanyService};
    use crate::server::error::{company::CompanyError, Error};

    #[test]
    fn formats_location_label() {
        assert_eq!(location_label(None, None), "Global");
        assert_eq!(location_label(Some("Global"), Some("All")), "Global");
        assert_eq!(location_label(Some("Canada"), None), "Canada");
        assert_eq!(location_label(Some("Canada"), Some("All")), "Canada");
        assert_eq!(location_label(Some("Canada"), Some("Ontario")), "Canada (Ontario)");
        assert_eq!(location_label(Some(" "), Some("Ontario")), "Global (Ontario)");
    }

    mod get_company {
        use super::*;

        /// Expect company detail with sorted assets, location and aggregate
        #[tokio::test]
        async fn returns_company_detail() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_company_tables()
                .with_mock_company(2, "Child", 1, 1)
                .build()
                .await?;
            test.company()
                .insert_mock_company_with_location(
                    1,
                    "Parent",
                    Some(TEST_COUNTRY),
                    Some(TEST_REGION),
                    3,
                    0,
                )
                .await?;
            test.company().insert_hierarchy_edge(1, 2).await?;
            test.company().insert_asset(1, "Zed Brand").await?;
            test.company().insert_asset(1, "Alpha Brand").await?;

            let company_service = CompanyService::new(&test.db);
            let company = company_service.get_company(1).await.unwrap();

            assert_eq!(company.name, "Parent");
            assert_eq!(company.location, "Canada (Ontario)");
            assert_eq!(company.assets, vec!["Alpha Brand", "Zed Brand"]);
            assert_eq!(company.votes.total_up, 4);
            assert_eq!(company.votes.total_down, 1);
            assert_eq!(company.votes.rank_percentage, "80.0");

            Ok(())
        }

        /// Expect NotFound for a company that doesn't exist
        #[tokio::test]
        async fn fails_for_missing_company() -> Result<(), TestError> {
            let test = TestBuilder::new().with_company_tables().build().await?;

            let company_service = CompanyService::new(&test.db);
            let result = company_service.get_company(7).await;

            assert!(matches!(
                result,
                Err(Error::CompanyError(CompanyError::NotFound(7)))
            ));

            Ok(())
        }
    }

    mod get_descendants {
        use super::*;

        #[tokio::test]
        async fn returns_descendants() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_company_tables()
                .with_mock_company(1, "A", 0, 0)
                .with_mock_company(2, "B", 0, 0)
                .with_hierarchy_edge(1, 2)
                .build()
                .await?;

            let company_service = CompanyService::new(&test.db);
            let descendants = company_service.get_descendants(1).await.unwrap();

            assert_eq!(descendants.company_id, 1);
            assert_eq!(descendants.descendants, vec![2]);

            Ok(())
        }

        /// Expect NotFound rather than an empty list for an unknown company
        #[tokio::test]
        async fn fails_for_missing_company() -> Result<(), TestError> {
            let test = TestBuilder::new().with_company_tables().build().await?;

            let company_service = CompanyService::new(&test.db);
            let result = company_service.get_descendants(1).await;

            assert!(matches!(
                result,
                Err(Error::CompanyError(CompanyError::NotFound(1)))
            ));

            Ok(())
        }
    }

    mod get_relations {
        use super::*;

        /// Expect parents and children split with individual ranks
        #[tokio::test]
        async fn splits_parents_and_children() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_company_tables()
                .with_mock_company(1, "Holding", 3, 1)
                .with_mock_company(2, "Middle", 0, 0)
                .with_mock_company(3, "Leaf", 0, 2)
                .with_hierarchy_edge(1, 2)
                .with_hierarchy_edge(2, 3)
                .build()
                .await?;

            let company_service = CompanyService::new(&test.db);
            let relations = company_service.get_relations(2).await.unwrap();

            assert_eq!(relations.parents.len(), 1);
            assert_eq!(relations.parents[0].name, "Holding");
            assert_eq!(relations.parents[0].rank_label, "75%");
            assert_eq!(relations.children.len(), 1);
            assert_eq!(relations.children[0].name, "Leaf");
            assert_eq!(relations.children[0].rank_percent, Some(0));

            Ok(())
        }

        #[tokio::test]
        async fn returns_empty_relations_for_isolated_company() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_company_tables()
                .with_mock_company(1, "Alone", 0, 0)
                .build()
                .await?;

            let company_service = CompanyService::new(&test.db);
            let relations = company_service.get_relations(1).await.unwrap();

            assert!(relations.parents.is_empty());
            assert!(relations.children.is_empty());

            Ok(())
        }
    }
}
