use serde::{Deserialize, Serialize};

/// Up/down counters, globally and for the regional tally
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VoteTallyDto {
    pub up: i64,
    pub down: i64,
    pub regional_up: i64,
    pub regional_down: i64,
}

/// Vote figures for a company and everything beneath it in the hierarchy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VoteAggregateDto {
    pub company_id: i32,
    pub own: VoteTallyDto,
    pub children: VoteTallyDto,
    pub total_up: i64,
    pub total_down: i64,
    pub total_regional_up: i64,
    pub total_regional_down: i64,
    pub own_net: i64,
    pub children_net: i64,
    pub total_net: i64,
    /// Total rank rounded to one decimal, e.g. `62.5`; `0.0` when there are no votes
    pub rank_percentage: String,
    pub own_percentage: String,
    pub children_percentage: String,
    pub descendant_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DescendantsDto {
    pub company_id: i32,
    /// Depth-first, parent-first order without duplicates
    pub descendants: Vec<i32>,
}

/// A directly related company in the hierarchy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RelatedCompanyDto {
    pub id: i32,
    pub name: String,
    pub rank_percent: Option<u32>,
    pub rank_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HierarchyRelationsDto {
    pub company_id: i32,
    pub parents: Vec<RelatedCompanyDto>,
    pub children: Vec<RelatedCompanyDto>,
}
