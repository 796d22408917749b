//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main maxranked crate to keep fixture signatures short.

/// Type alias for company database model.
pub type CompanyModel = entity::company::Model;

/// Type alias for hierarchy edge database model.
pub type CompanyHierarchyModel = entity::company_hierarchy::Model;

/// Type alias for regional vote record database model.
pub type CompanyRegionVoteModel = entity::company_region_vote::Model;

/// Type alias for brand/asset database model.
pub type BrandAssetModel = entity::brand_asset::Model;
