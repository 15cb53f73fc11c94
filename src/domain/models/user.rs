use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::location::Coordinates;

/// Store-assigned identity of a persisted user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i32);

impl UserId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Accepts a plain decimal integer only, taken as-is; anything else is not an id.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(Self)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// A user that has been built but not stored yet: no id, no timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub coordinates: Coordinates,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    coordinates: Coordinates,
    city: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub fn reconstruct(
        id: UserId,
        user: NewUser,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: user.name,
            email: user.email,
            coordinates: user.coordinates,
            city: user.city,
            created_at,
            updated_at,
        }
    }

    // getterのみ提供
    pub fn id(&self) -> UserId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
    pub fn city(&self) -> &str {
        &self.city
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
