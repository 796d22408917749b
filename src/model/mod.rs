//! API data transfer objects shared by controllers and services.

pub mod api;
pub mod company;
pub mod hierarchy;
pub mod submission;
pub mod vote;
