//! User service - staff accounts with hashed credentials.
//!
//! Plain text passwords never leave this module: they are hashed with
//! Argon2 before reaching the repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    validation::ensure_unique, CreateUser, Deactivation, PageRequest, Password, SoftDelete,
    UpdateUser, User, UserRole, RESOURCE_USER,
};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Page of users, deactivated ones included
    async fn list(&self, page: PageRequest) -> AppResult<Vec<User>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<User>;

    /// Create a new user; the email must not be registered yet
    async fn create(&self, request: CreateUser) -> AppResult<User>;

    /// Partial update; a non-empty password is re-hashed
    async fn update(&self, request: UpdateUser) -> AppResult<()>;

    /// Soft delete user (sets deleted_at timestamp)
    async fn deactivate(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    async fn ensure_email_available(&self, email: &str, updating: Option<Uuid>) -> AppResult<()> {
        let holder = self.repo.find_by_email(email).await?.map(|u| u.id);
        if let Err(e) = ensure_unique("email", email, holder, updating) {
            warn!(email = %email, "Email already registered");
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<User>> {
        let users = self.repo.list(page).await?;
        if users.is_empty() {
            return Err(AppError::not_found("users"));
        }
        Ok(users)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_USER)
    }

    async fn create(&self, request: CreateUser) -> AppResult<User> {
        request.check_required()?;
        let role = UserRole::parse_or_default(&request.role)?;
        self.ensure_email_available(&request.email, None).await?;

        let password = Password::new(&request.password)?;
        let user = User::new(
            Uuid::now_v7(),
            request.name,
            request.email,
            password.into_string(),
            role,
        );

        let user = self.repo.create(user).await?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    async fn update(&self, request: UpdateUser) -> AppResult<()> {
        let current = self.get_by_id(request.id).await?;
        current.ensure_active()?;

        let role = request.role()?;
        if let Some(email) = request.email() {
            self.ensure_email_available(email, Some(current.id)).await?;
        }

        let password_hash = match request.password() {
            Some(plain) => Password::new(plain)?.into_string(),
            None => current.password_hash.clone(),
        };

        let user = request.merge_into(&current, role, password_hash, Utc::now());
        self.repo.update(user).await?;

        info!(user_id = %current.id, "User updated");
        Ok(())
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let current = self.get_by_id(id).await?;
        if let Err(e) = current.ensure_can_deactivate() {
            warn!(user_id = %id, "User already deactivated");
            return Err(e.into());
        }

        self.repo.deactivate(id, Deactivation::now()).await?;

        info!(user_id = %id, "User deactivated");
        Ok(())
    }
}
