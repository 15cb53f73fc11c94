use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Rendered as `"<lat>,<lon>"`, the form geocoding providers expect in `q`.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Inclusive latitude/longitude rectangle a signup must fall inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Egypt's extent as accepted by this deployment.
    pub const EGYPT: Self = Self {
        min_latitude: 22.0,
        max_latitude: 34.0,
        min_longitude: 24.0,
        max_longitude: 37.0,
    };

    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&coordinates.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&coordinates.longitude)
    }
}

/// Place name fields of a single geocoding result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceComponents {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
}

impl PlaceComponents {
    /// city, then town, then village; blank values are skipped and the
    /// chosen value is returned as the provider sent it
    pub fn locality(&self) -> Option<&str> {
        [&self.city, &self.town, &self.village]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|name| !name.trim().is_empty())
    }
}

/// Only the first (best ranked) result is considered.
pub fn resolve_city(results: &[PlaceComponents]) -> Option<String> {
    results
        .first()
        .and_then(PlaceComponents::locality)
        .map(str::to_string)
}
