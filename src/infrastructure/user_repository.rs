use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            location::Coordinates,
            user::{NewUser, User, UserId},
        },
        repositories::user_repository::UserRepository,
    },
    infrastructure::entity::users,
};

/// Scale of the `DECIMAL(9,6)` coordinate columns.
const COORDINATE_SCALE: u32 = 6;

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let user_model = users::ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            latitude: Set(to_decimal(user.coordinates.latitude)?),
            longitude: Set(to_decimal(user.coordinates.longitude)?),
            city: Set(user.city),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = user_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        into_user(model)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find_by_id(id.value())
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        user.map(into_user).transpose()
    }
}

fn to_decimal(value: f64) -> Result<Decimal, RepositoryError> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(COORDINATE_SCALE))
        .ok_or_else(|| RepositoryError::DatabaseError(format!("coordinate {value} is not representable")))
}

fn to_f64(value: Decimal) -> Result<f64, RepositoryError> {
    value
        .to_f64()
        .ok_or_else(|| RepositoryError::DatabaseError(format!("coordinate {value} is not representable")))
}

fn into_user(model: users::Model) -> Result<User, RepositoryError> {
    let coordinates = Coordinates::new(to_f64(model.latitude)?, to_f64(model.longitude)?);

    Ok(User::reconstruct(
        UserId::new(model.id),
        NewUser {
            name: model.name,
            email: model.email,
            coordinates,
            city: model.city,
        },
        model.created_at.naive_utc().and_utc(),
        model.updated_at.naive_utc().and_utc(),
    ))
}
