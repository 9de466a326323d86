//! Merged-header table documents
//!
//! A merged-header table is edited as two grids, a multi-row header and a body.
//! This module gives them a JSON shape collaborators can load and save, plus the
//! blank and example documents an editor starts from.
//!
//! ## Example
//!
//! ```rust
//! use tabtex::templates::MergedTableDocument;
//!
//! let doc = MergedTableDocument::from_json(
//!     r#"{"header": [["A", "A"], ["x", "y"]], "body": [[1, 2]]}"#,
//! ).unwrap();
//! assert!(doc.render_preview().contains("colspan=\"2\""));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::grid::{BodyGrid, Grid, HeaderGrid};
use crate::core::html::render_preview_html;
use crate::core::latex::render_complex_latex;
use crate::core::options::ComplexOptions;
use crate::utils::error::TableResult;

/// Header and body grids of one merged-header table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentGrids")]
pub struct MergedTableDocument {
    pub header: HeaderGrid,
    pub body: BodyGrid,
}

#[derive(Deserialize)]
struct DocumentGrids {
    header: HeaderGrid,
    body: BodyGrid,
}

/// Header and body share their columns, so an empty grid takes the width of
/// the other one.
impl From<DocumentGrids> for MergedTableDocument {
    fn from(grids: DocumentGrids) -> Self {
        let header_cols = grids.header.col_count();
        let body_cols = grids.body.col_count();
        MergedTableDocument {
            header: grids.header.with_empty_width(body_cols),
            body: grids.body.with_empty_width(header_cols),
        }
    }
}

impl MergedTableDocument {
    /// Parse a `{ "header": [[...]], "body": [[...]] }` document.
    ///
    /// Ragged grids are rejected.
    pub fn from_json(input: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_preview(&self) -> String {
        render_preview_html(&self.header, &self.body)
    }

    pub fn render_latex(&self, options: &ComplexOptions) -> String {
        render_complex_latex(&self.header, &self.body, options)
    }
}

/// An empty document of the given shape
pub fn blank_document(header_rows: usize, cols: usize, body_rows: usize) -> MergedTableDocument {
    MergedTableDocument {
        header: Grid::blank(header_rows, cols),
        body: Grid::blank(body_rows, cols),
    }
}

/// Deep-sea observation dataset: two header levels with horizontal and
/// vertical merges
pub fn deep_sea_example() -> MergedTableDocument {
    MergedTableDocument {
        header: Grid::from_strs(&[
            ["観測コード", "水温 (C)", "水温 (C)", "塩分濃度", "塩分濃度", "深度"],
            ["観測コード", "エリアA", "エリアB", "ゾーンX", "ゾーンY", "トレンチZ"],
        ]),
        body: Grid::from_strs(&[
            ["データセット X01", "5.1", "1.3", "34.90", "35.15", "9870.5"],
            ["解析セット S02", "22.8", "7.7", "33.05", "36.88", "1234.9"],
        ]),
    }
}
