//! Company hierarchy traversal and vote roll-up.
//!
//! A company's rank includes the votes of every company beneath it. The hierarchy table stores
//! parent -> child edges without enforcing a tree shape, so traversal deduplicates companies
//! reachable along several paths and reports cycles as errors.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::hierarchy::{VoteAggregateDto, VoteTallyDto},
    server::{
        data::{
            company::CompanyRepository, hierarchy::HierarchyRepository,
            regional_vote::RegionalVoteRepository,
        },
        error::{company::CompanyError, hierarchy::HierarchyError, Error},
        model::db::CompanyModel,
        service::rank::rank_percentage,
    },
};

pub struct HierarchyAggregator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HierarchyAggregator<'a> {
    /// Creates a new instance of [`HierarchyAggregator`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves every company below the provided company in the hierarchy.
    ///
    /// Traverses depth-first, listing each company before its own children and visiting
    /// children in ascending ID order. A company reachable along several paths is listed once.
    /// The root itself is never included.
    ///
    /// # Arguments
    /// - `root_id` - ID of the company to resolve descendants for
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Descendant IDs, empty for a company without children
    /// - `Err(Error::HierarchyError)` - An edge leads back to a company on the current path
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn resolve_descendants(&self, root_id: i32) -> Result<Vec<i32>, Error> {
        let hierarchy_repo = HierarchyRepository::new(self.db);

        let mut descendants = Vec::new();
        let mut seen = HashSet::new();

        // `path` holds the companies whose children are being walked, `stack` the remaining
        // children at each level. Both always have the same length.
        let mut path = vec![root_id];
        let mut stack = vec![hierarchy_repo.get_child_ids(root_id).await?.into_iter()];

        while let Some(children) = stack.last_mut() {
            let Some(child_id) = children.next() else {
                stack.pop();
                path.pop();
                continue;
            };

            if path.contains(&child_id) {
                return Err(HierarchyError::Cycle {
                    root_id,
                    company_id: child_id,
                }
                .into());
            }

            if !seen.insert(child_id) {
                continue;
            }

            descendants.push(child_id);

            let grandchildren = hierarchy_repo.get_child_ids(child_id).await?;
            path.push(child_id);
            stack.push(grandchildren.into_iter());
        }

        Ok(descendants)
    }

    /// Computes the vote figures for a company and all of its descendants.
    ///
    /// # Arguments
    /// - `company_id` - ID of the company to aggregate
    ///
    /// # Returns
    /// - `Ok(VoteAggregateDto)` - Own, children and total figures with rank percentages
    /// - `Err(Error::CompanyError)` - Company does not exist
    /// - `Err(Error::HierarchyError)` - Hierarchy below the company contains a cycle
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn aggregate_votes(&self, company_id: i32) -> Result<VoteAggregateDto, Error> {
        let company = CompanyRepository::new(self.db)
            .get_by_id(company_id)
            .await?
            .ok_or(CompanyError::NotFound(company_id))?;

        self.aggregate_for_company(&company).await
    }

    /// Computes the vote figures for an already loaded company.
    pub(crate) async fn aggregate_for_company(
        &self,
        company: &CompanyModel,
    ) -> Result<VoteAggregateDto, Error> {
        let regional_repo = RegionalVoteRepository::new(self.db);

        let own_regional = regional_repo.get_by_company_id(company.id).await?;
        let own = VoteTallyDto {
            up: company.vote_up,
            down: company.vote_down,
            regional_up: own_regional.as_ref().map_or(0, |r| r.vote_up),
            regional_down: own_regional.as_ref().map_or(0, |r| r.vote_down),
        };

        let descendants = self.resolve_descendants(company.id).await?;
        let children = self.sum_descendant_votes(&descendants).await?;

        Ok(build_aggregate(company.id, own, children, descendants.len()))
    }

    /// Sums global and regional counters across the provided companies.
    ///
    /// Companies without a regional record contribute zero regional votes.
    async fn sum_descendant_votes(&self, company_ids: &[i32]) -> Result<VoteTallyDto, Error> {
        if company_ids.is_empty() {
            return Ok(VoteTallyDto::default());
        }

        let votes = CompanyRepository::new(self.db)
            .get_votes_by_ids(company_ids)
            .await?;
        let regional = RegionalVoteRepository::new(self.db)
            .get_by_company_ids(company_ids)
            .await?;

        // A company has at most one regional record
        let regional: HashMap<i32, (i64, i64)> = regional
            .into_iter()
            .map(|r| (r.company_id, (r.vote_up, r.vote_down)))
            .collect();

        let mut tally = VoteTallyDto::default();
        for (company_id, vote_up, vote_down) in votes {
            tally.up += vote_up;
            tally.down += vote_down;

            if let Some((regional_up, regional_down)) = regional.get(&company_id) {
                tally.regional_up += regional_up;
                tally.regional_down += regional_down;
            }
        }

        Ok(tally)
    }
}

fn build_aggregate(
    company_id: i32,
    own: VoteTallyDto,
    children: VoteTallyDto,
    descendant_count: usize,
) -> VoteAggregateDto {
    let total_up = own.up + children.up;
    let total_down = own.down + children.down;

    VoteAggregateDto {
        company_id,
        own,
        children,
        total_up,
        total_down,
        total_regional_up: own.regional_up + children.regional_up,
        total_regional_down: own.regional_down + children.regional_down,
        own_net: own.up - own.down,
        children_net: children.up - children.down,
        total_net: total_up - total_down,
        rank_percentage: rank_percentage(total_up, total_down),
        own_percentage: rank_percentage(own.up, own.down),
        children_percentage: rank_percentage(children.up, children.down),
        descendant_count,
    }
}
