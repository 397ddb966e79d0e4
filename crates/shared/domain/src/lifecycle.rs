//! Soft delete lifecycle shared by every inventory entity.
//!
//! An entity is `Active` while `status` is true and `deleted_at` is unset.
//! Deactivation stamps `deleted_at` and clears `status` together; there is
//! no transition back to `Active`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Lifecycle state of a stored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityState {
    Active,
    Inactive,
}

impl EntityState {
    /// Derive the state from the persisted soft delete columns.
    pub fn from_columns(status: bool, deleted_at: Option<DateTime<Utc>>) -> Self {
        if status && deleted_at.is_none() {
            EntityState::Active
        } else {
            EntityState::Inactive
        }
    }
}

/// Implemented by every entity carrying `status` and `deleted_at` columns.
pub trait SoftDelete {
    /// Resource name used in error messages ("customer", "product", ...)
    const RESOURCE: &'static str;

    fn status(&self) -> bool;

    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn state(&self) -> EntityState {
        EntityState::from_columns(self.status(), self.deleted_at())
    }

    fn is_active(&self) -> bool {
        self.state() == EntityState::Active
    }

    /// Guard for updates: deactivated entities are read-only.
    fn ensure_active(&self) -> DomainResult<()> {
        match self.state() {
            EntityState::Active => Ok(()),
            EntityState::Inactive => Err(DomainError::conflict(format!(
                "{} is deactivated",
                Self::RESOURCE
            ))),
        }
    }

    /// Guard for deactivation: rejects a second deactivation instead of
    /// silently succeeding.
    fn ensure_can_deactivate(&self) -> DomainResult<()> {
        match self.state() {
            EntityState::Active => Ok(()),
            EntityState::Inactive => Err(DomainError::conflict(format!(
                "{} already deactivated",
                Self::RESOURCE
            ))),
        }
    }
}

/// The column values written by a deactivation. Only constructible through
/// [`Deactivation::at`] / [`Deactivation::now`], so `status` is always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deactivation {
    deleted_at: DateTime<Utc>,
}

impl Deactivation {
    pub fn at(deleted_at: DateTime<Utc>) -> Self {
        Self { deleted_at }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn status(&self) -> bool {
        false
    }

    pub fn deleted_at(&self) -> DateTime<Utc> {
        self.deleted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing {
        status: bool,
        deleted_at: Option<DateTime<Utc>>,
    }

    impl SoftDelete for Thing {
        const RESOURCE: &'static str = "thing";

        fn status(&self) -> bool {
            self.status
        }

        fn deleted_at(&self) -> Option<DateTime<Utc>> {
            self.deleted_at
        }
    }

    #[test]
    fn test_state_from_columns() {
        assert_eq!(EntityState::from_columns(true, None), EntityState::Active);
        assert_eq!(
            EntityState::from_columns(false, Some(Utc::now())),
            EntityState::Inactive
        );
        // Either column alone marks the row inactive
        assert_eq!(EntityState::from_columns(false, None), EntityState::Inactive);
        assert_eq!(
            EntityState::from_columns(true, Some(Utc::now())),
            EntityState::Inactive
        );
    }

    #[test]
    fn test_active_entity_passes_guards() {
        let thing = Thing {
            status: true,
            deleted_at: None,
        };

        assert!(thing.is_active());
        assert!(thing.ensure_active().is_ok());
        assert!(thing.ensure_can_deactivate().is_ok());
    }

    #[test]
    fn test_inactive_entity_rejects_update_and_second_deactivation() {
        let thing = Thing {
            status: false,
            deleted_at: Some(Utc::now()),
        };

        assert_eq!(
            thing.ensure_active().unwrap_err(),
            DomainError::Conflict("thing is deactivated".to_string())
        );
        assert_eq!(
            thing.ensure_can_deactivate().unwrap_err(),
            DomainError::Conflict("thing already deactivated".to_string())
        );
    }

    #[test]
    fn test_deactivation_clears_status() {
        let at = Utc::now();
        let deactivation = Deactivation::at(at);

        assert!(!deactivation.status());
        assert_eq!(deactivation.deleted_at(), at);
        assert_eq!(
            EntityState::from_columns(deactivation.status(), Some(deactivation.deleted_at())),
            EntityState::Inactive
        );
    }
}
