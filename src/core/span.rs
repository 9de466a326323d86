//! Merge-aware header analysis
//!
//! Header cells with the same text are merged when they sit next to each other in
//! a row (horizontal run) or directly on top of each other (vertical merge).
//! Both the HTML preview and the LaTeX renderer consume the same walk so their
//! merges always agree.
//!
//! # Scan rules
//!
//! - Rows are processed top to bottom, columns left to right with a cursor.
//! - A horizontal run extends while the next column holds the same text.
//! - At the first column of a run, the cell directly above decides whether the
//!   run continues a merge started in the previous row; otherwise the cell directly
//!   below decides whether a two-row merge starts here.
//! - The cursor advances by the run width, so runs never overlap.
//!
//! Vertical merges only look one row up and one row down. Three equal stacked
//! cells become a two-row merge followed by a continuation, and deeper headers
//! under-merge below the second row.

use super::grid::HeaderGrid;

/// How a scanned header cell takes part in a vertical merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Stand-alone cell (possibly spanning several columns)
    Plain,
    /// Top half of a two-row merge
    VerticalStart,
    /// Covered by the merge started in the row above; not drawn as its own cell
    Continuation,
}

/// A detected rectangular run of equal header values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Header row the span starts in
    pub row: usize,
    /// First column covered
    pub start_col: usize,
    /// Number of columns covered
    pub col_span: usize,
    /// Number of rows covered (1 or 2)
    pub row_span: usize,
    /// Cell text
    pub label: String,
}

impl Span {
    /// One past the last column covered
    pub fn end_col(&self) -> usize {
        self.start_col + self.col_span
    }
}

/// One step of the header walk: a span together with its merge role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub span: Span,
    pub role: CellRole,
}

impl HeaderCell {
    /// Whether this cell gets its own visual cell
    pub fn is_visible(&self) -> bool {
        self.role != CellRole::Continuation
    }
}

/// Walk the header grid and return every horizontal run, continuations included.
///
/// Within each row the returned cells tile the columns exactly.
pub fn scan_header(header: &HeaderGrid) -> Vec<HeaderCell> {
    let rows = header.rows();
    let n_cols = header.col_count();
    let mut cells = Vec::new();

    for (r_idx, row) in rows.iter().enumerate() {
        let above = r_idx.checked_sub(1).and_then(|r| rows.get(r));
        let below = rows.get(r_idx + 1);

        let mut c_idx = 0;
        while c_idx < n_cols {
            let current = &row[c_idx];

            let mut col_span = 1;
            while c_idx + col_span < n_cols && row[c_idx + col_span] == *current {
                col_span += 1;
            }

            let role = if above.is_some_and(|prev| prev[c_idx] == *current) {
                CellRole::Continuation
            } else if below.is_some_and(|next| next[c_idx] == *current) {
                CellRole::VerticalStart
            } else {
                CellRole::Plain
            };

            cells.push(HeaderCell {
                span: Span {
                    row: r_idx,
                    start_col: c_idx,
                    col_span,
                    row_span: if role == CellRole::VerticalStart { 2 } else { 1 },
                    label: current.clone(),
                },
                role,
            });

            c_idx += col_span;
        }
    }

    tracing::trace!(
        header_rows = header.row_count(),
        cells = cells.len(),
        "scanned header"
    );
    cells
}

/// Detect the visible spans of a header grid, in row-major then column order.
///
/// Cells that continue a vertical merge from the row above produce no span.
pub fn analyze_header(header: &HeaderGrid) -> Vec<Span> {
    scan_header(header)
        .into_iter()
        .filter(HeaderCell::is_visible)
        .map(|cell| cell.span)
        .collect()
}

/// Group scanned cells by header row (one entry per row, in order)
pub fn scan_header_rows(header: &HeaderGrid) -> Vec<Vec<HeaderCell>> {
    let mut rows: Vec<Vec<HeaderCell>> = vec![Vec::new(); header.row_count()];
    for cell in scan_header(header) {
        rows[cell.span.row].push(cell);
    }
    rows
}
