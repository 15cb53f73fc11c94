//! In-memory collaborators shared by unit and router tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{
    error::{GeocodingError, RepositoryError},
    models::{
        location::{Coordinates, PlaceComponents},
        user::{NewUser, User, UserId},
    },
    repositories::user_repository::UserRepository,
    services::geocoding_service::Geocoder,
};

pub fn sample_user(id: i32) -> User {
    let at = Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap();
    User::reconstruct(
        UserId::new(id),
        NewUser {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            coordinates: Coordinates::new(30.0444, 31.2357),
            city: "Cairo".to_string(),
        },
        at,
        at,
    )
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    lookups: Arc<AtomicUsize>,
    broken: bool,
}

impl InMemoryUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            ..Default::default()
        }
    }

    /// Every call fails with a database error.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Default::default()
        }
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.broken {
            Err(RepositoryError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, RepositoryError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let next_id = users.iter().map(|u| u.id().value()).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let user = User::reconstruct(UserId::new(next_id), user, now, now);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }
}

#[derive(Clone)]
pub struct StubGeocoder {
    response: Arc<Option<Vec<PlaceComponents>>>,
    calls: Arc<AtomicUsize>,
}

impl StubGeocoder {
    pub fn results(results: Vec<PlaceComponents>) -> Self {
        Self {
            response: Arc::new(Some(results)),
            calls: Arc::default(),
        }
    }

    pub fn city(name: &str) -> Self {
        Self::results(vec![PlaceComponents {
            city: Some(name.to_string()),
            ..Default::default()
        }])
    }

    /// Behaves like a provider answering 503.
    pub fn failing() -> Self {
        Self {
            response: Arc::new(None),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn reverse_geocode(
        &self,
        _coordinates: Coordinates,
    ) -> Result<Vec<PlaceComponents>, GeocodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.response {
            Some(results) => Ok(results.clone()),
            None => Err(GeocodingError::Status(503)),
        }
    }
}
