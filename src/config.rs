use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_GEOCODING_URL: &str = "https://api.opencagedata.com/geocode/v1/json";
const DEFAULT_GEOCODING_LANGUAGE: &str = "en";
const DEFAULT_GEOCODING_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingConfig {
    pub endpoint: String,
    pub api_key: String,
    pub language: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub geocoding: GeocodingConfig,
}

impl AppConfig {
    /// Reads the process environment, after `.env` has been loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let bind_address = optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDRESS",
                message: e.to_string(),
            })?;

        let timeout_secs = match lookup("GEOCODING_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "GEOCODING_TIMEOUT_SECS",
                message: e.to_string(),
            })?,
            None => DEFAULT_GEOCODING_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address,
            geocoding: GeocodingConfig {
                endpoint: optional("OPENCAGE_URL", DEFAULT_GEOCODING_URL),
                api_key: required("OPENCAGE_API_KEY")?,
                language: optional("GEOCODING_LANGUAGE", DEFAULT_GEOCODING_LANGUAGE),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
