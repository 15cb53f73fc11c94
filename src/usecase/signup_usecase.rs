use crate::domain::{
    error::DomainError,
    models::{
        location::{BoundingBox, resolve_city},
        signup::SignupRequest,
        user::User,
    },
    repositories::user_repository::UserRepository,
    services::geocoding_service::Geocoder,
};

/// validate -> geocode -> persist, strictly in that order.
pub struct SignupUsecase<R: UserRepository, G: Geocoder> {
    user_repository: R,
    geocoder: G,
    bounds: BoundingBox,
}

impl<R: UserRepository, G: Geocoder> SignupUsecase<R, G> {
    pub fn new(user_repository: R, geocoder: G, bounds: BoundingBox) -> Self {
        Self {
            user_repository,
            geocoder,
            bounds,
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<User, DomainError>
    where
        R: Send + Sync,
    {
        let signup = request.validate(&self.bounds).inspect_err(|reason| {
            tracing::info!(reason = reason.reason(), "signup rejected");
        })?;

        let results = self
            .geocoder
            .reverse_geocode(signup.coordinates)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, coordinates = %signup.coordinates, "error fetching city");
            })?;

        let city = resolve_city(&results).ok_or_else(|| {
            tracing::warn!(coordinates = %signup.coordinates, results = results.len(), "no city for coordinates");
            DomainError::CityNotResolved
        })?;

        let new_user = self.user_repository.create(signup, city);
        let user = self.user_repository.save(new_user).await?;

        tracing::info!(user_id = user.id().value(), city = user.city(), "user signed up");
        Ok(user)
    }
}
