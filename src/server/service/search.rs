use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::company::CompanySummaryDto,
    server::{
        data::{asset::AssetRepository, company::CompanyRepository},
        error::Error,
        model::db::CompanyModel,
        service::rank::{individual_rank, rank_label},
    },
};

/// Upper bound on name suggestions regardless of the requested limit
pub const MAX_SUGGESTIONS: usize = 25;

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    /// Creates a new instance of [`SearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every company ordered by name along with the brands it owns
    pub async fn list_companies(&self) -> Result<Vec<CompanySummaryDto>, Error> {
        let companies = CompanyRepository::new(self.db).get_all().await?;

        self.with_brands(companies).await
    }

    /// Searches companies by name, case-insensitively.
    ///
    /// Exact name matches come first followed by names containing the term. A blank term
    /// matches nothing.
    ///
    /// # Arguments
    /// - `term` - Search term, surrounding whitespace is ignored
    ///
    /// # Returns
    /// - `Ok(Vec<CompanySummaryDto>)` - Matching companies with brands and individual rank
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn search(&self, term: &str) -> Result<Vec<CompanySummaryDto>, Error> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let companies = CompanyRepository::new(self.db)
            .search_by_name(&term, None)
            .await?;
        let matches = exact_first(companies, &term);

        self.with_brands(matches).await
    }

    /// Suggests company names containing the term, used to autocomplete parent names
    pub async fn suggest_names(&self, term: &str, limit: usize) -> Result<Vec<String>, Error> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let limit = limit.min(MAX_SUGGESTIONS) as u64;
        let companies = CompanyRepository::new(self.db)
            .search_by_name(&term, Some(limit))
            .await?;

        Ok(companies.into_iter().map(|c| c.name).collect())
    }

    async fn with_brands(
        &self,
        companies: Vec<CompanyModel>,
    ) -> Result<Vec<CompanySummaryDto>, Error> {
        let company_ids: Vec<i32> = companies.iter().map(|c| c.id).collect();
        let assets = AssetRepository::new(self.db)
            .get_by_company_ids(&company_ids)
            .await?;

        let mut brands: HashMap<i32, Vec<String>> = HashMap::new();
        for asset in assets {
            brands.entry(asset.company_id).or_default().push(asset.name);
        }

        Ok(companies
            .into_iter()
            .map(|company| {
                let company_brands = brands.remove(&company.id).unwrap_or_default();
                summarize(company, company_brands)
            })
            .collect())
    }
}

/// Moves companies named exactly `term` ahead of the rest
///
/// `term` must already be lowercase. Relative order within each group is preserved.
fn exact_first(companies: Vec<CompanyModel>, term: &str) -> Vec<CompanyModel> {
    let (exact, partial): (Vec<_>, Vec<_>) = companies
        .into_iter()
        .partition(|c| c.name.to_lowercase() == term);

    exact.into_iter().chain(partial).collect()
}

fn summarize(company: CompanyModel, brands: Vec<String>) -> CompanySummaryDto {
    let rank = individual_rank(company.vote_up, company.vote_down);

    CompanySummaryDto {
        id: company.id,
        name: company.name,
        country: company.country,
        vote_up: company.vote_up,
        vote_down: company.vote_down,
        brands,
        rank_percent: rank,
        rank_label: rank_label(rank),
    }
}
