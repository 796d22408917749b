//! Utility functions and helpers for server operations.

pub mod time;
