use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum HierarchyError {
    /// A hierarchy edge leads back to a company already on the traversal path.
    ///
    /// The hierarchy table does not enforce acyclicity, so this is reported instead of
    /// traversing forever.
    #[error(
        "Company hierarchy below company ID {root_id} contains a cycle: company ID {company_id} \
        is reachable from itself"
    )]
    Cycle { root_id: i32, company_id: i32 },
}

impl IntoResponse for HierarchyError {
    fn into_response(self) -> Response {
        match self {
            Self::Cycle { .. } => {
                tracing::warn!("{}", self);

                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "The company hierarchy for this company is malformed",
                )
            }
        }
    }
}
