//! Store (physical outlet) domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::RESOURCE_STORE;
use crate::error::DomainResult;
use crate::lifecycle::SoftDelete;
use crate::validation::{merge_text, require};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Store {
    pub fn new(id: Uuid, request: CreateStore) -> Self {
        Self {
            id,
            name: request.name,
            address: request.address,
            status: true,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl SoftDelete for Store {
    const RESOURCE: &'static str = RESOURCE_STORE;

    fn status(&self) -> bool {
        self.status
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateStore {
    #[serde(default)]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: String,
}

impl CreateStore {
    /// Both name and address are mandatory for a store.
    pub fn check_required(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        require("address", &self.address)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateStore {
    pub id: Uuid,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: Option<String>,
}

impl UpdateStore {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            address: None,
        }
    }

    pub fn merge_into(self, current: &Store, now: DateTime<Utc>) -> Store {
        Store {
            name: merge_text(self.name, &current.name),
            address: merge_text(self.address, &current.address),
            updated_at: Some(now),
            ..current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn test_address_required() {
        let request = CreateStore {
            name: "Outlet".to_string(),
            address: String::new(),
        };
        assert_eq!(
            request.check_required().unwrap_err(),
            DomainError::Validation("address is required".to_string())
        );
    }

    #[test]
    fn test_merge_keeps_missing_fields() {
        let current = Store::new(
            Uuid::now_v7(),
            CreateStore {
                name: "Outlet".to_string(),
                address: "Jl. Merdeka".to_string(),
            },
        );

        let mut request = UpdateStore::new(current.id);
        request.name = Some("Outlet 2".to_string());
        let merged = request.merge_into(&current, Utc::now());

        assert_eq!(merged.name, "Outlet 2");
        assert_eq!(merged.address, "Jl. Merdeka");
        assert!(merged.status);
    }
}
