//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use super::{parse_id, present};
use crate::config::{
    ERR_USER_CREATE_INPUT, ERR_USER_DELETE_INPUT, ERR_USER_GET_NOT_FOUND, ERR_USER_NOT_FOUND,
    ERR_USER_UPDATE_INPUT,
};
use crate::domain::{NewUser, User, UserParams};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::PersistenceGateway;

/// User service trait for dependency injection.
///
/// IDs arrive as raw path segments; parsing them is part of the use case.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user ordered by ID
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Create a user from `email` and `name`
    async fn create_user(&self, params: UserParams) -> AppResult<User>;

    /// Overwrite a user's `email` and `name`
    async fn update_user(&self, id: &str, params: UserParams) -> AppResult<User>;

    /// Physically delete a user
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService over a persistence gateway.
pub struct UserManager<P: PersistenceGateway> {
    persistence: Arc<P>,
}

impl<P: PersistenceGateway> UserManager<P> {
    /// Create new user service instance
    pub fn new(persistence: Arc<P>) -> Self {
        Self { persistence }
    }
}

#[async_trait]
impl<P: PersistenceGateway> UserService for UserManager<P> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.persistence.users().list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        let Some(id) = parse_id(id) else {
            return Err(AppError::not_found(ERR_USER_GET_NOT_FOUND));
        };

        self.persistence
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ERR_USER_GET_NOT_FOUND)
    }

    async fn create_user(&self, params: UserParams) -> AppResult<User> {
        let (Some(email), Some(name)) = (present(params.email), present(params.name)) else {
            tracing::warn!("User create rejected: email or name missing");
            return Err(AppError::invalid_input(ERR_USER_CREATE_INPUT));
        };

        let user = NewUser::new(email, name);
        user.validate()?;

        let created = self.persistence.users().create(user).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    async fn update_user(&self, id: &str, params: UserParams) -> AppResult<User> {
        let (Some(id), Some(email), Some(name)) =
            (parse_id(id), present(params.email), present(params.name))
        else {
            tracing::warn!("User update rejected: id, email or name missing");
            return Err(AppError::invalid_input(ERR_USER_UPDATE_INPUT));
        };

        let repo = self.persistence.users();
        let mut user = repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(ERR_USER_NOT_FOUND)?;

        user.apply_update(email, name);
        user.validate()?;

        let updated = repo.update(user).await?;
        tracing::info!(user_id = updated.id, "User updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id).ok_or_else(|| AppError::invalid_input(ERR_USER_DELETE_INPUT))?;

        let repo = self.persistence.users();
        repo.find_by_id(id)
            .await?
            .ok_or_not_found(ERR_USER_NOT_FOUND)?;

        repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
