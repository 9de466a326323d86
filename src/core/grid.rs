//! Rectangular string grids
//!
//! Every table the engine sees passes through one of the constructors here, so
//! downstream code can index `rows × cols` without re-checking widths.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::utils::error::{TableError, TableResult};

/// A rectangular grid of string cells (rows outer, columns inner)
///
/// The column count is stored separately so a grid with zero rows (e.g. a pasted
/// table that only had a header line) still knows its width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    cols: usize,
}

/// Grid used as multi-row header input; row 0 is the outermost grouping
pub type HeaderGrid = Grid;

/// Grid of data rows
pub type BodyGrid = Grid;

impl Grid {
    /// An empty grid with no rows and no columns
    pub fn empty() -> Self {
        Self::default()
    }

    /// A grid of `rows × cols` empty cells
    pub fn blank(rows: usize, cols: usize) -> Self {
        Grid {
            rows: vec![vec![String::new(); cols]; rows],
            cols,
        }
    }

    /// Build a grid from possibly ragged rows, padding every row with empty cells
    /// up to the widest one.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(cols, String::new());
                row
            })
            .collect();
        Grid { rows, cols }
    }

    /// Build a grid from rows that must already be rectangular.
    ///
    /// Grids coming from an editor are expected to be rectangular; a ragged one is
    /// a contract violation and is rejected here rather than deeper in the engine.
    pub fn from_rectangular(rows: Vec<Vec<String>>) -> TableResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(TableError::RaggedGrid {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Grid { rows, cols })
    }

    /// Build a grid from string slices (padding like [`Grid::from_rows`])
    pub fn from_strs<'a, R: AsRef<[&'a str]>>(rows: &[R]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    /// Build a grid from JSON cell values.
    ///
    /// Strings are kept, `null` becomes an empty cell and any other value is
    /// stringified. Rows must be rectangular.
    pub fn from_json_rows(rows: Vec<Vec<Value>>) -> TableResult<Self> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();
        Self::from_rectangular(rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Give a zero-row grid a width; grids with rows keep their own.
    pub(crate) fn with_empty_width(mut self, cols: usize) -> Self {
        if self.rows.is_empty() {
            self.cols = cols;
        }
        self
    }

    /// Split the grid into its first row and the remaining rows.
    pub(crate) fn split_first_row(self) -> (Option<Vec<String>>, Grid) {
        let cols = self.cols;
        let mut rows = self.rows.into_iter();
        let first = rows.next();
        (
            first,
            Grid {
                rows: rows.collect(),
                cols,
            },
        )
    }

    /// Split the grid into its first column and the remaining columns.
    pub(crate) fn split_first_column(self) -> (Vec<String>, Grid) {
        let cols = self.cols.saturating_sub(1);
        let mut first = Vec::with_capacity(self.rows.len());
        let rows = self
            .rows
            .into_iter()
            .map(|mut row| {
                if row.is_empty() {
                    first.push(String::new());
                } else {
                    first.push(row.remove(0));
                }
                row
            })
            .collect();
        (first, Grid { rows, cols })
    }
}

/// Stringify one JSON cell the way the editor displays it
fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Grids serialize as plain arrays of arrays, so a zero-row grid loses its
/// width on the way out. [`MergedTableDocument`](crate::templates::MergedTableDocument)
/// restores it from the other grid of the document.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Value>>::deserialize(deserializer)?;
        Grid::from_json_rows(rows).map_err(serde::de::Error::custom)
    }
}
