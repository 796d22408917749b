//! HTTP controller endpoints for the MaxRanked web API.
//!
//! This module contains Axum handlers for company browsing, voting, and moderation queue
//! submissions. Controllers extract request data, call into services, and return JSON
//! responses. Endpoints are documented for OpenAPI with utoipa.

pub mod company;
pub mod submission;
pub mod util;
pub mod vote;
