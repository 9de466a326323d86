//! Utility modules
//!
//! This module contains the error type and result alias used across the crate.

pub mod error;

// Re-export commonly used items
pub use error::{TableError, TableResult};
