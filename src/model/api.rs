use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for requests that only report an outcome message
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human readable outcome
    pub message: String,
}
