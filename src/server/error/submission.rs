use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Validation failures for moderation queue submissions.
///
/// The `Display` text of each variant is returned to the client as-is.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Company name is required")]
    MissingCompanyName,
    #[error("Brand/asset name is required")]
    MissingAssetName,
    #[error("Parent company name is required")]
    MissingParentName,
    #[error("No matching company found for that name")]
    ParentNotFound(String),
    #[error("A company cannot be its own parent")]
    SelfParent(i32),
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected submission: {:?}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
