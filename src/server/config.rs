use std::time::Duration;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_GEO_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_GEO_BACKOFF_MS: u64 = 2000;
const DEFAULT_TRUST_FORWARDED_FOR: bool = false;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Base URL of the IP geolocation API, geolocation is disabled when unset
    pub geo_api_url: Option<String>,
    pub geo_max_attempts: u32,
    pub geo_backoff: Duration,
    /// Identify voters by `X-Forwarded-For`, only safe behind a proxy that overwrites it
    pub trust_forwarded_for: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            geo_api_url: optional("GEO_API_URL"),
            geo_max_attempts: parse_or("GEO_MAX_ATTEMPTS", DEFAULT_GEO_MAX_ATTEMPTS)?,
            geo_backoff: Duration::from_millis(parse_or("GEO_BACKOFF_MS", DEFAULT_GEO_BACKOFF_MS)?),
            trust_forwarded_for: parse_or("TRUST_FORWARDED_FOR", DEFAULT_TRUST_FORWARDED_FOR)?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Reads a variable, treating blank values as unset
fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional(var) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
