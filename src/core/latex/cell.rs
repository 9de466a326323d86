//! Tabular cells and column alignment

use crate::core::span::{CellRole, HeaderCell};
use crate::data::constants::TEXT_COMMAND;

/// Alignment letter of a tabular column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    Left,
    #[default]
    Center,
}

impl ColumnAlign {
    pub fn letter(self) -> char {
        match self {
            ColumnAlign::Left => 'l',
            ColumnAlign::Center => 'c',
        }
    }
}

/// Tabular preamble such as `lcc`
pub fn column_spec(aligns: &[ColumnAlign]) -> String {
    aligns.iter().map(|align| align.letter()).collect()
}

/// One rendered cell of a tabular row, possibly merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanCell {
    pub text: String,
    pub rows: usize,
    pub cols: usize,
    /// Alignment inside `\multicolumn`; ignored for unmerged cells
    pub align: ColumnAlign,
}

impl SpanCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self::merged(text, 1, 1)
    }

    /// A cell covering `rows × cols` grid positions
    pub fn merged(text: impl Into<String>, rows: usize, cols: usize) -> Self {
        SpanCell {
            text: text.into(),
            rows,
            cols,
            align: ColumnAlign::Center,
        }
    }

    /// A column label wrapped in the text command, e.g. `\text{Name}`
    pub fn label(label: &str) -> Self {
        Self::new(format!("{}{{{}}}", TEXT_COMMAND, label))
    }

    /// The lower half of a vertical merge keeps its width but not its text;
    /// the `\multirow` above already prints it.
    pub fn from_header_cell(cell: &HeaderCell) -> Self {
        let span = &cell.span;
        match cell.role {
            CellRole::Continuation => Self::merged(String::new(), 1, span.col_span),
            CellRole::VerticalStart => {
                Self::merged(span.label.as_str(), span.row_span, span.col_span)
            }
            CellRole::Plain => Self::merged(span.label.as_str(), 1, span.col_span),
        }
    }

    /// `\multirow` nests inside `\multicolumn` when a cell spans both ways.
    pub fn to_latex(&self) -> String {
        let body = match self.rows {
            0 | 1 => self.text.clone(),
            rows => format!("\\multirow{{{}}}{{*}}{{{}}}", rows, self.text),
        };
        match self.cols {
            0 | 1 => body,
            cols => format!("\\multicolumn{{{}}}{{{}}}{{{}}}", cols, self.align.letter(), body),
        }
    }
}

/// Join rendered cells into one tabular row terminated by `\\`
pub fn row_to_latex<'a>(cells: impl IntoIterator<Item = &'a str>) -> String {
    let mut row = cells.into_iter().collect::<Vec<_>>().join(" & ");
    row.push_str(" \\\\");
    row
}
