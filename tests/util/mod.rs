//! Test utilities for building `AppState` and reading handler responses

use std::time::Duration;

use axum::{
    body::to_bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maxranked::server::{error::Error, model::app::AppState, service::geo::GeoClient};
use maxranked_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState
pub trait TestContextExt {
    /// AppState without geolocation
    fn to_app_state(&self) -> AppState;

    /// AppState with a geolocation client pointed at the mock server, single attempt
    fn to_app_state_with_geo(&self) -> AppState;

    /// AppState without geolocation that identifies voters by `X-Forwarded-For`
    fn to_app_state_trusting_proxy(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn to_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            geo_client: None,
            trust_forwarded_for: false,
        }
    }

    fn to_app_state_with_geo(&self) -> AppState {
        let geo_client = GeoClient::new(self.server_url(), 1, Duration::ZERO)
            .expect("Failed to build geolocation client");

        AppState {
            db: self.db.clone(),
            geo_client: Some(geo_client),
            trust_forwarded_for: false,
        }
    }

    fn to_app_state_trusting_proxy(&self) -> AppState {
        AppState {
            trust_forwarded_for: true,
            ..self.to_app_state()
        }
    }
}

/// Converts a handler result into its HTTP response
pub fn into_response<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Splits a response into its status and deserialized JSON body
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> (StatusCode, T) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = serde_json::from_slice(&bytes).expect("Failed to deserialize response body");

    (status, body)
}
