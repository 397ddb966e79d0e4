//! Common utilities shared across the inventory workspace.
//!
//! This crate provides:
//! - Unified error handling and the HTTP error envelope
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{ApiError, AppError, AppResult, ErrorKind, OptionExt, ResultExt};
