//! Offset/limit bounds for list operations.

use serde::Serialize;

use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::error::{DomainError, DomainResult};

/// Validated pagination window passed down to repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Build a window from raw query values.
    ///
    /// Negative values are rejected. A zero limit falls back to
    /// [`DEFAULT_PAGE_LIMIT`] and large limits are capped at [`MAX_PAGE_LIMIT`].
    pub fn new(offset: i64, limit: i64) -> DomainResult<Self> {
        if offset < 0 || limit < 0 {
            return Err(DomainError::validation("invalid offset or limit"));
        }

        let limit = match limit as u64 {
            0 => DEFAULT_PAGE_LIMIT,
            n => n.min(MAX_PAGE_LIMIT),
        };

        Ok(Self {
            offset: offset as u64,
            limit,
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_bounds_rejected() {
        assert!(PageRequest::new(-1, 10).is_err());
        assert!(PageRequest::new(0, -5).is_err());
    }

    #[test]
    fn test_zero_limit_uses_default() {
        let page = PageRequest::new(0, 0).unwrap();
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn test_limit_is_capped() {
        let page = PageRequest::new(40, 10_000).unwrap();
        assert_eq!(page.offset, 40);
        assert_eq!(page.limit, MAX_PAGE_LIMIT);
    }
}
