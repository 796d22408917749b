//! `SeaORM` Entity prelude

pub use super::brand_asset::Entity as BrandAsset;
pub use super::company::Entity as Company;
pub use super::company_hierarchy::Entity as CompanyHierarchy;
pub use super::company_region_vote::Entity as CompanyRegionVote;
pub use super::pending_asset::Entity as PendingAsset;
pub use super::pending_company::Entity as PendingCompany;
pub use super::pending_hierarchy::Entity as PendingHierarchy;
pub use super::pending_vote::Entity as PendingVote;
