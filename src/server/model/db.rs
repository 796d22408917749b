//! Database model type aliases.
//!
//! Single point of reference for the `entity` crate models used throughout the server.

/// Type alias for company database model.
///
/// # Fields (from `entity::company::Model`)
/// - `id` - Primary key, unique company identifier
/// - `name` - Display name, also the key for search and name matching
/// - `country` - Country the company is ranked in (nullable, null means global)
/// - `region` - Sub-national region (nullable, `All` means no sub-national distinction)
/// - `vote_up` / `vote_down` - Global vote counters
/// - `created_at` - Timestamp when the company was approved
pub type CompanyModel = entity::company::Model;

/// Type alias for a parent -> child hierarchy edge.
pub type CompanyHierarchyModel = entity::company_hierarchy::Model;

/// Type alias for a company's regional vote counters, at most one per company.
pub type CompanyRegionVoteModel = entity::company_region_vote::Model;

/// Type alias for a brand/asset owned by a company.
pub type BrandAssetModel = entity::brand_asset::Model;

/// Type alias for a company awaiting moderation.
pub type PendingCompanyModel = entity::pending_company::Model;

/// Type alias for a brand/asset awaiting moderation.
pub type PendingAssetModel = entity::pending_asset::Model;

/// Type alias for a parent relationship awaiting moderation.
pub type PendingHierarchyModel = entity::pending_hierarchy::Model;

/// Type alias for a vote awaiting moderation.
pub type PendingVoteModel = entity::pending_vote::Model;
