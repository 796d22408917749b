//! Time window calculation utilities.
//!
//! Votes are limited to one per company per voter per window. Windows are fixed-length
//! buckets counted from the Unix epoch.

use chrono::{DateTime, Utc};

/// Length of a voting window in hours.
pub const VOTE_WINDOW_HOURS: i64 = 48;

/// Calculates the index of the voting window containing `now`.
///
/// # Example
/// ```ignore
/// use chrono::{TimeZone, Utc};
///
/// let start = Utc.timestamp_opt(0, 0).unwrap();
/// assert_eq!(vote_window(start), 0);
///
/// let later = Utc.timestamp_opt(48 * 3600, 0).unwrap();
/// assert_eq!(vote_window(later), 1);
/// ```
pub fn vote_window(now: DateTime<Utc>) -> i64 {
    now.timestamp().div_euclid(VOTE_WINDOW_HOURS * 3600)
}
