//! MaxRanked: public company rankings with parent/subsidiary vote roll-ups.

pub mod model;
pub mod server;
