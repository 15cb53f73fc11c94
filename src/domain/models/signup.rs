use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    error::ValidationError,
    models::location::{BoundingBox, Coordinates},
};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("email pattern is valid")
});

/// Raw signup data as submitted by a client. Nothing is trusted yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Signup data that passed every check and may be geocoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSignup {
    pub name: String,
    pub email: String,
    pub coordinates: Coordinates,
}

impl SignupRequest {
    /// Checks run in a fixed order and the first failure wins.
    pub fn validate(&self, bounds: &BoundingBox) -> Result<ValidatedSignup, ValidationError> {
        let name = non_blank(self.name.as_deref()).ok_or(ValidationError::EmptyName)?;
        let email = non_blank(self.email.as_deref()).ok_or(ValidationError::EmptyEmail)?;

        if !is_valid_email_format(email) {
            return Err(ValidationError::InvalidEmailFormat);
        }

        // explicit presence checks: 0.0 is a value, not an absence
        let latitude = numeric(self.latitude).ok_or(ValidationError::MissingLatitude)?;
        let longitude = numeric(self.longitude).ok_or(ValidationError::MissingLongitude)?;

        let coordinates = Coordinates::new(latitude, longitude);
        if !bounds.contains(&coordinates) {
            return Err(ValidationError::OutOfBounds);
        }

        Ok(ValidatedSignup {
            name: name.to_string(),
            email: email.to_string(),
            coordinates,
        })
    }
}

pub fn is_valid_email_format(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn numeric(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
