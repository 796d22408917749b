//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per table group:
//! live company data (companies, hierarchy edges, regional votes, brands/assets) and the
//! moderation queues new submissions are written to.

pub mod asset;
pub mod company;
pub mod hierarchy;
pub mod pending;
pub mod regional_vote;

/// Most IDs bound into a single `IN (...)` filter; larger lists are queried in chunks
pub const MAX_IDS_PER_QUERY: usize = 500;
