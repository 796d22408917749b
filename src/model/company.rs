use serde::{Deserialize, Serialize};

use crate::model::hierarchy::VoteAggregateDto;

/// A company as listed in search results
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompanySummaryDto {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub vote_up: i64,
    pub vote_down: i64,
    /// Names of brands/assets owned by the company
    pub brands: Vec<String>,
    /// Whole-number rank percentage, `None` when the company has no votes
    pub rank_percent: Option<u32>,
    /// Display form of the rank, e.g. `75%` or `No votes`
    pub rank_label: String,
}

/// Full company detail including rolled-up votes across its subsidiaries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompanyDetailDto {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub region: Option<String>,
    /// `Global` when no country is set, with ` (region)` appended for sub-national regions
    pub location: String,
    /// Brand/asset names ordered alphabetically
    pub assets: Vec<String>,
    pub votes: VoteAggregateDto,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Search term, matched case-insensitively against company names
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SuggestQuery {
    /// Partial company name
    pub q: Option<String>,
    /// Maximum suggestions to return
    pub limit: Option<usize>,
}
