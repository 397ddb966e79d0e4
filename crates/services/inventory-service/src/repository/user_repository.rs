//! User repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait, Unchanged,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::{ensure_affected, unique_error, update_error};
use common::AppResult;
use domain::{Deactivation, PageRequest, User, RESOURCE_USER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Queries include deactivated users, so an email stays taken after its
/// owner is deactivated.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user (password already hashed)
    async fn create(&self, user: User) -> AppResult<User>;

    /// Update user fields, including the stored password hash
    async fn update(&self, user: User) -> AppResult<()>;

    /// Soft delete user by ID (sets deleted_at timestamp)
    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()>;
}

/// Concrete implementation of UserRepository with soft delete
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn email_taken(email: &str) -> impl FnOnce() -> String + '_ {
    move || format!("email {} already registered", email)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        result.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let email = user.email.clone();
        let txn = self.db.begin().await?;

        let model = ActiveModel::from(user)
            .insert(&txn)
            .await
            .map_err(|e| unique_error(e, email_taken(&email)))?;
        txn.commit().await?;

        User::try_from(model)
    }

    async fn update(&self, user: User) -> AppResult<()> {
        let email = user.email.clone();
        let txn = self.db.begin().await?;

        let active = ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.to_string()),
            updated_at: Set(user.updated_at),
            ..Default::default()
        };
        active.update(&txn).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => update_error(RESOURCE_USER, e),
            other => unique_error(other, email_taken(&email)),
        })?;

        txn.commit().await?;
        Ok(())
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let result = UserEntity::update_many()
            .set(ActiveModel {
                status: Set(deactivation.status()),
                deleted_at: Set(Some(deactivation.deleted_at())),
                ..Default::default()
            })
            .filter(user::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        ensure_affected(RESOURCE_USER, result.rows_affected)?;

        txn.commit().await?;
        Ok(())
    }
}
