//! # tabtex
//!
//! Pasted spreadsheet tables and merged-header grids to LaTeX and HTML.
//!
//! ## Features
//!
//! - **Paste to LaTeX**: tab-separated text from a spreadsheet becomes a
//!   `table`/`tabular` environment with optional caption and label
//! - **Merged headers**: repeated header cells become `\multicolumn`/`\multirow`
//!   with booktabs rules and `\cmidrule` under grouped columns
//! - **HTML preview**: the same merges as `colspan`/`rowspan` for an editor view
//! - **Exports**: CSV, HTML and delimiter-separated text
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Pasted table
//!
//! ```rust
//! use tabtex::{parse, render_simple, RenderOptions};
//!
//! let table = parse("\tX\tY\nR1\t1\t2\nR2\t3\t4", true, true);
//! assert_eq!(table.row_labels, Some(vec!["R1".to_string(), "R2".to_string()]));
//!
//! let latex = render_simple(&table, &RenderOptions::default());
//! assert!(latex.contains(r"\begin{tabular}{lcc}"));
//! ```
//!
//! ### Merged header
//!
//! ```rust
//! use tabtex::{analyze_header, render_complex_latex, ComplexOptions, Grid};
//!
//! let header = Grid::from_strs(&[["A", "A", "B"], ["A", "A", "C"]]);
//! let body = Grid::from_strs(&[["1", "2", "3"]]);
//!
//! let spans = analyze_header(&header);
//! assert_eq!((spans[0].col_span, spans[0].row_span), (2, 2));
//!
//! let latex = render_complex_latex(&header, &body, &ComplexOptions::default());
//! assert!(latex.contains(r"\multicolumn{2}{c}{\multirow{2}{*}{A}}"));
//! ```

/// Core parsing and rendering
pub mod core;

/// Data layer - fixed style constants
pub mod data;

/// Feature modules - exports and merged-table documents
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core functions and types
pub use core::{
    analyze_header, parse, parse_with_options, render_complex_latex, render_preview_html,
    render_simple, scan_header, BodyGrid, CaptionPosition, CellRole, ComplexOptions, Grid,
    HeaderCell, HeaderGrid, ParseOptions, ParsedTable, Placement, RenderOptions, Span,
};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::export;
pub use features::templates;
pub use features::templates::MergedTableDocument;

// Re-export utilities
pub use utils::error::{TableError, TableResult};

/// Output formats for a pasted table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Latex,
    Csv,
    Html,
    Tsv,
}

/// Render a parsed table in the requested format.
///
/// Only CSV serialization can fail.
pub fn export_table(
    table: &ParsedTable,
    format: ExportFormat,
    options: &RenderOptions,
) -> TableResult<String> {
    match format {
        ExportFormat::Latex => Ok(render_simple(table, options)),
        ExportFormat::Csv => export::to_csv(table),
        ExportFormat::Html => Ok(export::to_html_document(table)),
        ExportFormat::Tsv => Ok(table.to_delimited('\t')),
    }
}

/// Parse a JSON grid (array of arrays) into a rectangular [`Grid`]
pub fn grid_from_json(input: &str) -> TableResult<Grid> {
    Ok(serde_json::from_str(input)?)
}
