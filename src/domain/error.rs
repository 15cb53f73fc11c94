use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Error fetching city from coordinates: {0}")]
    GeocodingUnavailable(#[from] GeocodingError),

    #[error("Could not determine the city based on the provided coordinates.")]
    CityNotResolved,

    #[error("Repository error: {0}")]
    PersistenceFailure(#[from] RepositoryError),

    #[error("User with ID {id} not found.")]
    NotFound { id: String },
}

impl DomainError {
    /// Stable error kind code, exposed in HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::GeocodingUnavailable(_) => "geocoding_unavailable",
            Self::CityNotResolved => "city_not_resolved",
            Self::PersistenceFailure(_) => "persistence_failure",
            Self::NotFound { .. } => "not_found",
        }
    }
}

/// Reason a signup request was rejected before any I/O happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required and cannot be empty.")]
    EmptyName,

    #[error("Email is required and cannot be empty.")]
    EmptyEmail,

    #[error("Invalid email format.")]
    InvalidEmailFormat,

    #[error("Latitude is required.")]
    MissingLatitude,

    #[error("Longitude is required.")]
    MissingLongitude,

    #[error("The location is outside of Egypt. Please provide valid coordinates within Egypt.")]
    OutOfBounds,
}

impl ValidationError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyEmail => "empty_email",
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::MissingLatitude => "missing_latitude",
            Self::MissingLongitude => "missing_longitude",
            Self::OutOfBounds => "out_of_bounds",
        }
    }
}

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("provider responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
