//! Server application models and type definitions.
//!
//! Application state shared by HTTP handlers and database model type aliases.

pub mod app;
pub mod db;
