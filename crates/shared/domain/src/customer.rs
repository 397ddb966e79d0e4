//! Customer domain entity and request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::RESOURCE_CUSTOMER;
use crate::error::DomainResult;
use crate::lifecycle::SoftDelete;
use crate::validation::{merge_text, require};

/// Customer domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub address: String,
    pub is_member: bool,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft delete timestamp (None = active)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Build a new active, non-member customer from a create request.
    pub fn new(id: Uuid, request: CreateCustomer) -> Self {
        Self {
            id,
            name: request.name,
            phone_number: request.phone_number,
            address: request.address,
            is_member: false,
            status: true,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl SoftDelete for Customer {
    const RESOURCE: &'static str = RESOURCE_CUSTOMER;

    fn status(&self) -> bool {
        self.status
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Customer creation request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateCustomer {
    /// Customer name (required)
    #[serde(default)]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 32, message = "phone_number must be at most 32 characters"))]
    pub phone_number: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: String,
}

impl CreateCustomer {
    /// Required-field rules for a new customer.
    pub fn check_required(&self) -> DomainResult<()> {
        require("name", &self.name)
    }
}

/// Customer partial update request. Missing or empty fields keep the stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateCustomer {
    pub id: Uuid,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 32, message = "phone_number must be at most 32 characters"))]
    pub phone_number: Option<String>,
    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: Option<String>,
}

impl UpdateCustomer {
    /// An update request touching nothing but the target id.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            phone_number: None,
            address: None,
        }
    }

    /// Merge this request over the stored customer and stamp `updated_at`.
    pub fn merge_into(self, current: &Customer, now: DateTime<Utc>) -> Customer {
        Customer {
            name: merge_text(self.name, &current.name),
            phone_number: merge_text(self.phone_number, &current.phone_number),
            address: merge_text(self.address, &current.address),
            updated_at: Some(now),
            ..current.clone()
        }
    }
}
