use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::ReqwestError(reqwest_error) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        // Upstream is temporarily unavailable
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,
                        // Rate limited
                        s if s.as_u16() == 429 => ErrorRetryStrategy::Retry,
                        // Any other client error won't change on retry
                        _ => ErrorRetryStrategy::Fail,
                    }
                } else if reqwest_error.is_decode() {
                    // Unexpected response body, retrying returns the same body
                    ErrorRetryStrategy::Fail
                } else {
                    // Network error or connection issue - should retry
                    ErrorRetryStrategy::Retry
                }
            }

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Query, constraint, and conversion errors are permanent
                _ => ErrorRetryStrategy::Fail,
            },

            Self::IoError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::CompanyError(_) => ErrorRetryStrategy::Fail,
            Self::HierarchyError(_) => ErrorRetryStrategy::Fail,
            Self::VoteError(_) => ErrorRetryStrategy::Fail,
            Self::SubmissionError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
