//! Service layer for business logic.
//!
//! Services coordinate repositories and the geolocation client: company search and detail,
//! hierarchy traversal and vote roll-up, vote submission, moderation queue submissions, and
//! retry logic for external calls.

pub mod company;
pub mod geo;
pub mod hierarchy;
pub mod rank;
pub mod retry;
pub mod search;
pub mod submission;
pub mod vote;
