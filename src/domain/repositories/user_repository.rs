use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        signup::ValidatedSignup,
        user::{NewUser, User, UserId},
    },
};

#[async_trait]
pub trait UserRepository {
    /// Build an unsaved user from validated signup data and a resolved city.
    fn create(&self, signup: ValidatedSignup, city: String) -> NewUser {
        NewUser {
            name: signup.name,
            email: signup.email,
            coordinates: signup.coordinates,
            city,
        }
    }

    /// Persist the user, assigning its id and timestamps.
    async fn save(&self, user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
}
