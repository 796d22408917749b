use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CompanyError {
    #[error("Company ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for CompanyError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(company_id) => {
                tracing::debug!(company_id = %company_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Company not found")
            }
        }
    }
}
