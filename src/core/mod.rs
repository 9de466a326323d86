//! Core table engine
//!
//! This module contains the parsing and rendering pipeline:
//! - `grid`: rectangular string grids (the single padding/validation boundary)
//! - `parser`: delimiter-separated text to `ParsedTable`
//! - `span`: merge detection over multi-row headers
//! - `html`: HTML preview with `colspan`/`rowspan`
//! - `latex`: simple and merged-header LaTeX renderers
//! - `options`: parse and render options

pub mod grid;
pub mod html;
pub mod latex;
pub mod options;
pub mod parser;
pub mod span;

// Re-export main types and functions
pub use grid::{BodyGrid, Grid, HeaderGrid};
pub use html::render_preview_html;
pub use latex::{render_complex_latex, render_simple};
pub use options::{CaptionPosition, ComplexOptions, ParseOptions, Placement, RenderOptions};
pub use parser::{parse, parse_with_options, ParsedTable};
pub use span::{analyze_header, scan_header, CellRole, HeaderCell, Span};
