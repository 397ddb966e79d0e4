//! Admission rules applied before a create or update reaches storage.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Reject an empty (or whitespace-only) required field.
pub fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Partial update rule for text: a missing or empty value keeps `current`.
pub fn merge_text(incoming: Option<String>, current: &str) -> String {
    match incoming {
        Some(value) if !value.is_empty() => value,
        _ => current.to_string(),
    }
}

/// Partial update rule for numbers: a missing or zero value keeps `current`.
pub fn merge_number(incoming: Option<i32>, current: i32) -> i32 {
    match incoming {
        Some(value) if value != 0 => value,
        _ => current,
    }
}

/// The non-empty value of an optional request field, if any.
pub fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Uniqueness rule for a key such as a product SKU or a user email.
///
/// `holder` is the id of the record currently owning `value`, if any.
/// `updating` is the id of the record being updated; a record never
/// conflicts with itself.
pub fn ensure_unique(
    key: &str,
    value: &str,
    holder: Option<Uuid>,
    updating: Option<Uuid>,
) -> DomainResult<()> {
    match holder {
        Some(owner) if Some(owner) != updating => Err(DomainError::conflict(format!(
            "{} {} already registered",
            key, value
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(
            require("name", "").unwrap_err(),
            DomainError::Validation("name is required".to_string())
        );
        assert!(require("address", "   ").is_err());
        assert!(require("name", "Candy Hub").is_ok());
    }

    #[test]
    fn test_merge_text_keeps_existing_on_empty() {
        assert_eq!(merge_text(Some(String::new()), "Alice"), "Alice");
        assert_eq!(merge_text(None, "Alice"), "Alice");
        assert_eq!(merge_text(Some("Bob".to_string()), "Alice"), "Bob");
    }

    #[test]
    fn test_merge_number_keeps_existing_on_zero() {
        assert_eq!(merge_number(Some(0), 7), 7);
        assert_eq!(merge_number(None, 7), 7);
        assert_eq!(merge_number(Some(3), 7), 3);
    }

    #[test]
    fn test_provided_skips_empty() {
        assert_eq!(provided(&Some("x".to_string())), Some("x"));
        assert_eq!(provided(&Some(String::new())), None);
        assert_eq!(provided(&None), None);
    }

    #[test]
    fn test_ensure_unique() {
        let owner = Uuid::now_v7();
        let other = Uuid::now_v7();

        assert!(ensure_unique("sku", "X", None, None).is_ok());
        assert_eq!(
            ensure_unique("sku", "X", Some(owner), None).unwrap_err(),
            DomainError::Conflict("sku X already registered".to_string())
        );
        assert!(ensure_unique("sku", "X", Some(owner), Some(other)).is_err());
        // Re-sending its own key is not a conflict
        assert!(ensure_unique("sku", "X", Some(owner), Some(owner)).is_ok());
    }
}
