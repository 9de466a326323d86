//! Feature modules - exports and templates
//!
//! - `export`: CSV / HTML / file output for parsed tables
//! - `templates`: blank and example grids for the merged-header editor

pub mod export;
pub mod templates;

pub use export::{escape_html, to_csv, to_html, to_html_document, write_export};
pub use templates::{blank_document, deep_sea_example, MergedTableDocument};
