//! LaTeX table rendering
//!
//! Two renderers share the cell and rule primitives in this module:
//!
//! ```text
//! ParsedTable              -> simple  -> \hline-ruled table, one header row
//! HeaderGrid + BodyGrid    -> complex -> booktabs table, merged header rows
//! ```
//!
//! # Example
//!
//! ```
//! use tabtex::core::grid::Grid;
//! use tabtex::core::latex::render_complex_latex;
//! use tabtex::core::options::ComplexOptions;
//!
//! let header = Grid::from_strs(&[["Site", "Temp", "Temp"], ["Site", "A", "B"]]);
//! let body = Grid::from_strs(&[["X01", "5.1", "1.3"]]);
//! let latex = render_complex_latex(&header, &body, &ComplexOptions::default());
//! assert!(latex.contains("\\multirow{2}{*}{Site}"));
//! assert!(latex.contains("\\cmidrule(lr){2-3}"));
//! ```

mod cell;
mod complex;
mod rule;
mod simple;

#[cfg(test)]
mod tests;

// Re-export public API
pub use cell::{column_spec, SpanCell, ColumnAlign};
pub use complex::render_complex_latex;
pub use rule::TableRule;
pub use simple::render_simple;
