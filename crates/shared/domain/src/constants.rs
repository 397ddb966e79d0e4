//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_STAFF: &str = "staff";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_STAFF, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Pagination
// =============================================================================

/// Page size used when the client sends `limit=0` or omits it
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

/// Upper bound for a single page
pub const MAX_PAGE_LIMIT: u64 = 100;

// =============================================================================
// Resource names (used in error messages and logs)
// =============================================================================

pub const RESOURCE_CUSTOMER: &str = "customer";
pub const RESOURCE_PRODUCT: &str = "product";
pub const RESOURCE_STORE: &str = "store";
pub const RESOURCE_USER: &str = "user";
