//! `SeaORM` entities for the MaxRanked database schema.

pub mod prelude;

pub mod brand_asset;
pub mod company;
pub mod company_hierarchy;
pub mod company_region_vote;
pub mod pending_asset;
pub mod pending_company;
pub mod pending_hierarchy;
pub mod pending_vote;
