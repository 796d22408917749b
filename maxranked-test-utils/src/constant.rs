//! Shared constant values used across tests.
//!
//! These are placeholder values only; none of them identify a real voter or location.

/// Voter key used for votes cast in tests.
pub static TEST_VOTER_KEY: &str = "203.0.113.7";

/// Second voter key, for tests that need votes from distinct voters.
pub static TEST_OTHER_VOTER_KEY: &str = "198.51.100.23";

/// Country returned by the mock geolocation endpoint by default.
pub static TEST_COUNTRY: &str = "Canada";

/// Region returned by the mock geolocation endpoint by default.
pub static TEST_REGION: &str = "Ontario";
