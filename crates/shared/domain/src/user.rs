//! User domain entity and related types.

use std::borrow::Cow;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::constants::{RESOURCE_USER, ROLE_ADMIN, ROLE_STAFF, VALID_ROLES};
use crate::error::{DomainError, DomainResult};
use crate::lifecycle::SoftDelete;
use crate::validation::{merge_text, provided, require};

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Staff,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Parse an optional role from a request; empty means the default role.
    pub fn parse_or_default(value: &str) -> DomainResult<Self> {
        if value.is_empty() {
            return Ok(UserRole::default());
        }
        value.parse()
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_STAFF => Ok(UserRole::Staff),
            _ => Err(DomainError::validation(format!(
                "role must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Staff => write!(f, "{}", ROLE_STAFF),
        }
    }
}

/// User domain entity. The password is only ever held as an Argon2 hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: UserRole,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft delete timestamp (None = active, Some = deactivated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active user
    pub fn new(id: Uuid, name: String, email: String, password_hash: String, role: UserRole) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            status: true,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl SoftDelete for User {
    const RESOURCE: &'static str = RESOURCE_USER;

    fn status(&self) -> bool {
        self.status
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Email format check that lets an empty value through; emptiness is
/// handled by the required/partial-update rules instead.
fn email_format(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        return Ok(());
    }
    let mut err = ValidationError::new("email");
    err.message = Some(Cow::from("email is invalid"));
    Err(err)
}

/// User creation data transfer object
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User display name
    #[serde(default)]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
    /// User email address, unique across all users
    #[serde(default)]
    #[validate(custom(function = "email_format"))]
    pub email: String,
    /// User password (minimum 8 characters)
    #[serde(default)]
    pub password: String,
    /// `admin` or `staff`; defaults to `staff`
    #[serde(default)]
    pub role: String,
}

impl CreateUser {
    pub fn check_required(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// User partial update data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    pub id: Uuid,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(custom(function = "email_format"))]
    pub email: Option<String>,
    /// New password; rehashed when non-empty
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UpdateUser {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            email: None,
            password: None,
            role: None,
        }
    }

    /// The email this update would write, when it changes anything.
    pub fn email(&self) -> Option<&str> {
        provided(&self.email)
    }

    pub fn password(&self) -> Option<&str> {
        provided(&self.password)
    }

    /// The requested role, if one was sent.
    pub fn role(&self) -> DomainResult<Option<UserRole>> {
        provided(&self.role).map(str::parse).transpose()
    }

    /// Merge over the stored user. `password_hash` is the hash to store,
    /// either freshly computed or the current one.
    pub fn merge_into(
        self,
        current: &User,
        role: Option<UserRole>,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> User {
        User {
            name: merge_text(self.name, &current.name),
            email: merge_text(self.email, &current.email),
            password_hash,
            role: role.unwrap_or(current.role),
            updated_at: Some(now),
            ..current.clone()
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: user.deleted_at,
        }
    }
}
