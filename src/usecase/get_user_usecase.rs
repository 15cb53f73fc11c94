use crate::domain::{
    error::DomainError,
    models::user::{User, UserId},
    repositories::user_repository::UserRepository,
};

pub struct GetUserUsecase<R: UserRepository> {
    user_repository: R,
}

impl<R: UserRepository> GetUserUsecase<R> {
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }

    /// `id` is whatever the caller sent. It only reaches the store as a typed
    /// integer, so a malformed id is simply a miss.
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, DomainError>
    where
        R: Send + Sync,
    {
        let not_found = || DomainError::NotFound { id: id.to_string() };

        let user_id = UserId::parse(id).ok_or_else(not_found)?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(not_found)
    }
}
