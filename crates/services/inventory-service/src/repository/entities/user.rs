//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::AppError;
use domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    /// Soft delete timestamp (NULL = active, set = deactivated)
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity. A role outside `UserRole` means
/// the row was written outside this service and is reported, not coerced.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role: UserRole = model.role.parse().map_err(|_| {
            AppError::internal(format!(
                "user {} has unknown role {:?}",
                model.id, model.role
            ))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        })
    }
}

impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.to_string()),
            status: Set(user.status),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
            deleted_at: Set(user.deleted_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::ErrorKind;

    fn model(role: &str) -> Model {
        Model {
            id: Uuid::now_v7(),
            name: "Budi".to_string(),
            email: "budi@example.com".to_string(),
            password_hash: "$argon2id$stored".to_string(),
            role: role.to_string(),
            status: true,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    #[test]
    fn test_model_with_known_role_converts() {
        let user = User::try_from(model("admin")).unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_model_with_unknown_role_is_internal_error() {
        let err = User::try_from(model("superuser")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
