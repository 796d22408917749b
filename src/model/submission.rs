use serde::{Deserialize, Serialize};

/// A new company submitted for moderation
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompanySubmissionDto {
    pub company_name: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub parent_company_name: Option<String>,
}

/// A brand or asset submitted for moderation
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssetSubmissionDto {
    pub asset_name: String,
    /// Name of the owning company
    pub company_name: Option<String>,
}

/// A proposed parent for an existing company
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ParentSubmissionDto {
    pub parent_name: String,
}
