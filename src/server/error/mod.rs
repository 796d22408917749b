//! Error types for the MaxRanked server application.
//!
//! Specialized error types cover each domain (configuration, companies, hierarchy traversal,
//! votes, submissions). All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for their `Display` and `Error` implementations.

pub mod company;
pub mod config;
pub mod hierarchy;
pub mod retry;
pub mod submission;
pub mod vote;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        company::CompanyError, config::ConfigError, hierarchy::HierarchyError,
        submission::SubmissionError, vote::VoteError,
    },
};

/// Main error type for the MaxRanked server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. `#[from]` conversions allow `?` on repository and HTTP client results. Store failures
/// always surface through this type; callers never receive zero-filled figures in place of
/// an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Company lookup error.
    #[error(transparent)]
    CompanyError(#[from] CompanyError),
    /// Structural error in the company hierarchy (cycles).
    #[error(transparent)]
    HierarchyError(#[from] HierarchyError),
    /// Vote submission error (duplicate votes, failed inserts).
    #[error(transparent)]
    VoteError(#[from] VoteError),
    /// Submission validation error.
    #[error(transparent)]
    SubmissionError(#[from] SubmissionError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in MaxRanked's code.
    #[error("Internal error with MaxRanked's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error (geolocation lookups).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// IO error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Submission validation failures and unknown vote types
/// - 404 Not Found - Missing companies
/// - 409 Conflict - Duplicate votes
/// - 422 Unprocessable Entity - Cyclic company hierarchy
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CompanyError(err) => err.into_response(),
            Self::HierarchyError(err) => err.into_response(),
            Self::VoteError(err) => err.into_response(),
            Self::SubmissionError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
