//! Test fixture modules for database and HTTP mock creation.
//!
//! - `company` - companies, hierarchy edges, regional vote records and brands/assets
//! - `geo` - geolocation API response bodies and mock endpoints

pub mod company;
pub mod geo;
