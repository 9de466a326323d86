//! Fixed markup constants
//!
//! Styling is fixed. Every renderer reads its markup
//! fragments from here.

// ============================================================================
// LaTeX
// ============================================================================

/// Command wrapped around header labels in the simple renderer
pub const TEXT_COMMAND: &str = "\\text";

/// Indentation of lines inside the `table` environment (simple renderer)
pub const TABLE_INDENT: &str = "    ";

/// Indentation of lines inside the `tabular` environment (simple renderer)
pub const TABULAR_INDENT: &str = "        ";

// ============================================================================
// HTML preview
// ============================================================================

/// Style of the preview `<table>` element
pub const PREVIEW_TABLE_STYLE: &str =
    "border-collapse: collapse; width: 100%; text-align: center; font-family: sans-serif;";

/// Style applied uniformly to every preview header cell
pub const PREVIEW_HEADER_STYLE: &str =
    "background-color: #f0f2f6; border: 1px solid #ddd; padding: 8px; font-weight: bold;";

/// Style applied to every preview body cell
pub const PREVIEW_BODY_STYLE: &str = "border: 1px solid #ddd; padding: 6px;";

