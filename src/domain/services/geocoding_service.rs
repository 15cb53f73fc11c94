use async_trait::async_trait;

use crate::domain::{
    error::GeocodingError,
    models::location::{Coordinates, PlaceComponents},
};

/// Reverse geocoding: coordinates to candidate place names, best match first.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Vec<PlaceComponents>, GeocodingError>;
}
