//! Delimiter-separated text parser
//!
//! Turns text copied out of a spreadsheet or a Notion/office table (tab-separated
//! by default) into a [`ParsedTable`]. Copy sources often strip trailing tabs, so
//! rows are padded to the widest row instead of being rejected.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::options::ParseOptions;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\n|\r").unwrap();
}

/// Result of parsing pasted text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Column labels (one per data column) when the first row was promoted
    pub column_labels: Option<Vec<String>>,
    /// Per-row labels when the first column was used as an index
    pub row_labels: Option<Vec<String>>,
    /// The header entry that sat above the index column
    pub index_label: Option<String>,
    /// Data rows
    pub data: Grid,
}

impl ParsedTable {
    /// A table with column labels over a data grid (no row labels)
    pub fn with_labels(column_labels: Vec<String>, data: Grid) -> Self {
        ParsedTable {
            column_labels: Some(column_labels),
            row_labels: None,
            index_label: None,
            data,
        }
    }

    /// "Empty" means zero data rows, independent of labels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    /// Number of data columns (the row-label column is not counted)
    pub fn col_count(&self) -> usize {
        self.data.col_count()
    }

    pub fn has_row_labels(&self) -> bool {
        self.row_labels.is_some()
    }

    /// Serialize back into delimiter-separated text using the same layout the
    /// parser understands: an optional header line (index label first), then one
    /// line per data row (row label first).
    pub fn to_delimited(&self, delimiter: char) -> String {
        let sep = delimiter.to_string();
        let mut lines = Vec::with_capacity(self.row_count() + 1);

        if let Some(ref labels) = self.column_labels {
            let mut cells: Vec<&str> = Vec::with_capacity(labels.len() + 1);
            if self.has_row_labels() {
                cells.push(self.index_label.as_deref().unwrap_or(""));
            }
            cells.extend(labels.iter().map(String::as_str));
            lines.push(cells.join(&sep));
        }

        for (idx, row) in self.data.rows().iter().enumerate() {
            let mut cells: Vec<&str> = Vec::with_capacity(row.len() + 1);
            if let Some(ref row_labels) = self.row_labels {
                cells.push(row_labels.get(idx).map_or("", String::as_str));
            }
            cells.extend(row.iter().map(String::as_str));
            lines.push(cells.join(&sep));
        }

        lines.join("\n")
    }
}

/// Parse tab-separated text.
///
/// # Arguments
/// * `text` - Pasted text, one table row per line
/// * `use_first_row_as_header` - Promote the first row to column labels
/// * `use_first_column_as_index` - Move the first column into row labels
pub fn parse(
    text: &str,
    use_first_row_as_header: bool,
    use_first_column_as_index: bool,
) -> ParsedTable {
    parse_with_options(
        text,
        &ParseOptions {
            first_row_as_header: use_first_row_as_header,
            first_column_as_index: use_first_column_as_index,
            ..ParseOptions::default()
        },
    )
}

/// Parse delimiter-separated text with explicit options.
///
/// Blank or whitespace-only input yields an empty table rather than an error.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> ParsedTable {
    if text.trim().is_empty() {
        return ParsedTable::default();
    }

    // Blank lines around the table are dropped, but not the leading delimiter of
    // the first real line: it is the blank corner cell of a labelled table.
    let lines: Vec<&str> = LINE_BREAK.split(text).collect();
    let is_blank = |line: &&str| line.trim().is_empty();
    let (Some(first), Some(last)) = (
        lines.iter().position(|line| !is_blank(line)),
        lines.iter().rposition(|line| !is_blank(line)),
    ) else {
        return ParsedTable::default();
    };

    let rows: Vec<Vec<String>> = lines[first..=last]
        .iter()
        .map(|line| {
            line.split(options.delimiter)
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();

    let grid = Grid::from_rows(rows);
    tracing::debug!(
        rows = grid.row_count(),
        cols = grid.col_count(),
        "split delimited text into grid"
    );

    let (mut column_labels, data) = if options.first_row_as_header {
        grid.split_first_row()
    } else {
        (None, grid)
    };

    let mut table = ParsedTable {
        column_labels: None,
        row_labels: None,
        index_label: None,
        data,
    };

    if options.first_column_as_index {
        let (row_labels, rest) = table.data.split_first_column();
        table.row_labels = Some(row_labels);
        table.data = rest;
        if let Some(ref mut labels) = column_labels {
            if !labels.is_empty() {
                table.index_label = Some(labels.remove(0));
            }
        }
    }

    table.column_labels = column_labels;
    tracing::debug!(
        rows = table.row_count(),
        cols = table.col_count(),
        header = table.column_labels.is_some(),
        index = table.row_labels.is_some(),
        "parsed table"
    );
    table
}
