//! Product domain entity and request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::RESOURCE_PRODUCT;
use crate::error::DomainResult;
use crate::lifecycle::SoftDelete;
use crate::validation::{merge_number, merge_text, provided, require};

/// Product domain entity. `sku` is unique across every stored product,
/// deactivated ones included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub name: String,
    pub brand: String,
    pub sugar_level: i32,
    pub production_year: String,
    pub distributor: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(id: Uuid, request: CreateProduct) -> Self {
        Self {
            id,
            sku: request.sku,
            product_type: request.product_type,
            name: request.name,
            brand: request.brand,
            sugar_level: request.sugar_level,
            production_year: request.production_year,
            distributor: request.distributor,
            status: true,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl SoftDelete for Product {
    const RESOURCE: &'static str = RESOURCE_PRODUCT;

    fn status(&self) -> bool {
        self.status
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Product creation request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateProduct {
    /// Stock keeping unit, unique per product
    #[serde(default)]
    #[validate(length(max = 64, message = "sku must be at most 64 characters"))]
    pub sku: String,
    #[serde(default, rename = "type")]
    #[validate(length(max = 64, message = "type must be at most 64 characters"))]
    pub product_type: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "brand must be at most 255 characters"))]
    pub brand: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "sugar_level must not be negative"))]
    pub sugar_level: i32,
    #[serde(default)]
    #[validate(length(max = 16, message = "production_year must be at most 16 characters"))]
    pub production_year: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "distributor must be at most 255 characters"))]
    pub distributor: String,
}

impl CreateProduct {
    /// Required-field rules for a new product.
    pub fn check_required(&self) -> DomainResult<()> {
        require("sku", &self.sku)?;
        require("name", &self.name)
    }
}

/// Product partial update request. Missing or empty text and a zero
/// `sugar_level` keep the stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateProduct {
    pub id: Uuid,
    #[validate(length(max = 64, message = "sku must be at most 64 characters"))]
    pub sku: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 64, message = "type must be at most 64 characters"))]
    pub product_type: Option<String>,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "brand must be at most 255 characters"))]
    pub brand: Option<String>,
    #[validate(range(min = 0, message = "sugar_level must not be negative"))]
    pub sugar_level: Option<i32>,
    #[validate(length(max = 16, message = "production_year must be at most 16 characters"))]
    pub production_year: Option<String>,
    #[validate(length(max = 255, message = "distributor must be at most 255 characters"))]
    pub distributor: Option<String>,
}

impl UpdateProduct {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            sku: None,
            product_type: None,
            name: None,
            brand: None,
            sugar_level: None,
            production_year: None,
            distributor: None,
        }
    }

    /// The SKU this update would write, when it changes anything.
    pub fn sku(&self) -> Option<&str> {
        provided(&self.sku)
    }

    pub fn merge_into(self, current: &Product, now: DateTime<Utc>) -> Product {
        Product {
            sku: merge_text(self.sku, &current.sku),
            product_type: merge_text(self.product_type, &current.product_type),
            name: merge_text(self.name, &current.name),
            brand: merge_text(self.brand, &current.brand),
            sugar_level: merge_number(self.sugar_level, current.sugar_level),
            production_year: merge_text(self.production_year, &current.production_year),
            distributor: merge_text(self.distributor, &current.distributor),
            updated_at: Some(now),
            ..current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn cola() -> Product {
        Product::new(
            Uuid::now_v7(),
            CreateProduct {
                sku: "A1".to_string(),
                product_type: "soda".to_string(),
                name: "Cola".to_string(),
                brand: "Fizz".to_string(),
                sugar_level: 5,
                production_year: "2024".to_string(),
                distributor: "PT Maju".to_string(),
            },
        )
    }

    #[test]
    fn test_sku_and_name_required() {
        let mut request = CreateProduct {
            name: "Cola".to_string(),
            ..Default::default()
        };
        assert_eq!(
            request.check_required().unwrap_err(),
            DomainError::Validation("sku is required".to_string())
        );

        request.sku = "A1".to_string();
        request.name = String::new();
        assert_eq!(
            request.check_required().unwrap_err(),
            DomainError::Validation("name is required".to_string())
        );
    }

    #[test]
    fn test_zero_sugar_level_keeps_stored_value() {
        let current = cola();
        let mut request = UpdateProduct::new(current.id);
        request.sugar_level = Some(0);
        request.brand = Some("Pop".to_string());

        let merged = request.merge_into(&current, Utc::now());
        assert_eq!(merged.sugar_level, 5);
        assert_eq!(merged.brand, "Pop");
        assert_eq!(merged.sku, "A1");
        assert!(merged.updated_at.is_some());
    }

    #[test]
    fn test_update_sku_ignores_empty() {
        let mut request = UpdateProduct::new(Uuid::now_v7());
        assert_eq!(request.sku(), None);
        request.sku = Some(String::new());
        assert_eq!(request.sku(), None);
        request.sku = Some("B2".to_string());
        assert_eq!(request.sku(), Some("B2"));
    }

    #[test]
    fn test_type_field_name_on_the_wire() {
        let json = serde_json::to_value(cola()).unwrap();
        assert_eq!(json["type"], "soda");
        assert!(json.get("product_type").is_none());

        let request: CreateProduct =
            serde_json::from_value(serde_json::json!({ "sku": "A1", "type": "juice" })).unwrap();
        assert_eq!(request.product_type, "juice");
        assert_eq!(request.sugar_level, 0);
    }
}
