use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum VoteError {
    /// The request named a vote type other than `up` or `down`.
    #[error("Invalid vote type: {0:?}")]
    InvalidVoteType(String),
    /// The store rejected the vote as a duplicate for this voter, company, and window.
    #[error("Voter already voted for company ID {company_id} in the current window")]
    AlreadyVoted { company_id: i32 },
    /// The vote could not be stored for any other reason.
    #[error("Failed to record vote for company ID {company_id}: {source}")]
    Failed {
        company_id: i32,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidVoteType(_) => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "Vote type must be \"up\" or \"down\"",
                )
            }
            Self::AlreadyVoted { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::CONFLICT,
                    "You've already voted for this company in the last 48 hours!",
                )
            }
            Self::Failed { .. } => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Vote failed - please try again",
                )
            }
        }
    }
}
