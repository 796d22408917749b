//! Server application core modules.
//!
//! This module contains all server-side functionality for MaxRanked, including HTTP routing,
//! company search and hierarchy vote roll-ups, vote submission, moderation queue submissions,
//! and IP geolocation.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
