//! Data layer - Static constants
//!
//! Fixed LaTeX fragments and HTML styles shared by the renderers.

pub mod constants;

// Re-export commonly used items
pub use constants::{PREVIEW_BODY_STYLE, PREVIEW_HEADER_STYLE, PREVIEW_TABLE_STYLE, TEXT_COMMAND};
