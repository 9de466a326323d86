//! Booktabs LaTeX for tables with merged multi-row headers
//!
//! Header rows come from [`scan_header_rows`], so the merges here are exactly the
//! ones the HTML preview shows:
//!
//! - the top half of a vertical merge becomes `\multirow{2}{*}{label}`,
//! - the bottom half becomes an empty cell,
//! - a horizontal run becomes `\multicolumn{n}{c}{...}` and, when it has a label
//!   and another header row follows, gets a `\cmidrule(lr){a-b}` underneath.

use super::cell::{column_spec, row_to_latex, ColumnAlign, SpanCell};
use super::rule::TableRule;
use crate::core::grid::{BodyGrid, HeaderGrid};
use crate::core::options::ComplexOptions;
use crate::core::span::scan_header_rows;

/// Render a header grid and a body grid as a booktabs `table`.
///
/// The tabular gets one centered column per **body** column; header rows are
/// walked up to the header's own column count. Returns an empty string when the
/// body has no rows.
pub fn render_complex_latex(
    header: &HeaderGrid,
    body: &BodyGrid,
    options: &ComplexOptions,
) -> String {
    if body.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();

    let placement = options
        .placement
        .map(|p| format!("[{}]", p))
        .unwrap_or_default();
    lines.push(format!("\\begin{{table}}{}", placement));
    lines.push("\\centering".to_string());
    if !options.caption.is_empty() {
        lines.push(format!("\\caption{{{}}}", options.caption));
    }
    if !options.label.is_empty() {
        lines.push(format!("\\label{{{}}}", options.label));
    }

    let aligns = vec![ColumnAlign::Center; body.col_count()];
    lines.push(format!("\\begin{{tabular}}{{{}}}", column_spec(&aligns)));
    lines.push(TableRule::Top.to_string());

    let header_rows = scan_header_rows(header);
    let header_count = header_rows.len();
    for (r_idx, cells) in header_rows.iter().enumerate() {
        let has_next_row = r_idx + 1 < header_count;
        let mut rendered = Vec::with_capacity(cells.len());
        let mut rules = Vec::new();

        for cell in cells {
            rendered.push(SpanCell::from_header_cell(cell).to_latex());

            let span = &cell.span;
            if span.col_span > 1 && !span.label.trim().is_empty() && has_next_row {
                rules.push(TableRule::under_columns(span.start_col, span.end_col()).to_string());
            }
        }

        lines.push(row_to_latex(rendered.iter().map(String::as_str)));
        if !rules.is_empty() {
            lines.push(rules.join(" "));
        }
    }

    lines.push(TableRule::Mid.to_string());
    for row in body.rows() {
        lines.push(row_to_latex(row.iter().map(String::as_str)));
    }
    lines.push(TableRule::Bottom.to_string());
    lines.push("\\end{tabular}".to_string());
    lines.push("\\end{table}".to_string());

    tracing::debug!(
        header_rows = header_count,
        body_rows = body.row_count(),
        cols = body.col_count(),
        "rendered merged-header LaTeX table"
    );
    lines.join("\n")
}
