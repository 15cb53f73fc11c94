use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::GeocodingConfig,
    domain::{
        error::GeocodingError,
        models::location::{Coordinates, PlaceComponents},
        services::geocoding_service::Geocoder,
    },
};

// `results` and `components` may be absent or null; both read as empty.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    components: Option<PlaceComponents>,
}

/// Reverse geocoding against the OpenCage JSON API.
#[derive(Clone)]
pub struct OpenCageGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl OpenCageGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Vec<PlaceComponents>, GeocodingError> {
        let query = coordinates.to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.as_str()),
                ("key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GeocodingError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Status(status.as_u16()));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::MalformedBody(e.to_string()))?;

        let results = body.results.unwrap_or_default();
        tracing::debug!(%coordinates, results = results.len(), "geocoding response");
        Ok(results
            .into_iter()
            .map(|r| r.components.unwrap_or_default())
            .collect())
    }
}
