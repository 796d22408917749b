//! IP geolocation client.
//!
//! Resolves a voter's address to a country and region so votes can be attributed to a
//! regional tally. Lookups are best effort: callers treat failures as "unknown location".

use std::time::Duration;

use serde::Deserialize;

use crate::server::{error::Error, service::retry::RetryContext};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Location reported by the geolocation API, blank fields are normalised to `None`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GeoLocation {
    #[serde(rename = "country_name")]
    pub country: Option<String>,
    pub region: Option<String>,
}

#[derive(Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryContext,
}

impl GeoClient {
    /// Creates a client for a geolocation API serving `GET {base_url}/{ip}/json/`
    ///
    /// # Arguments
    /// - `base_url` - API base URL, e.g. `https://ipapi.co`
    /// - `max_attempts` - Attempts per lookup before giving up
    /// - `backoff` - Initial delay between attempts
    pub fn new(
        base_url: impl Into<String>,
        max_attempts: u32,
        backoff: Duration,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryContext::with_policy(max_attempts, backoff),
        })
    }

    /// Looks up the location of an IP address
    ///
    /// # Returns
    /// - `Ok(GeoLocation)` - Location found, either field may be `None`
    /// - `Err(Error::ReqwestError)` - Request failed after retries or returned an error status
    pub async fn lookup(&self, ip: &str) -> Result<GeoLocation, Error> {
        let url = format!("{}/{}/json/", self.base_url, ip);

        let location = self
            .retry
            .execute_with_retry(&format!("geolocation lookup for {}", ip), || {
                let http = self.http.clone();
                let url = url.clone();

                async move {
                    let location = http
                        .get(&url)
                        .send()
                        .await?
                        .error_for_status()?
                        .json::<GeoLocation>()
                        .await?;

                    Ok(location)
                }
            })
            .await?;

        Ok(GeoLocation {
            country: non_blank(location.country),
            region: non_blank(location.region),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
