//! Fixed-style LaTeX for pasted tables
//!
//! One header row at most, no merge detection. Output shape:
//!
//! ```text
//! \begin{table}[h]
//!     \centering
//!     \begin{tabular}{lcc}
//!         \hline
//!          & \text{X} & \text{Y} \\
//!         \hline
//!         R1 & 1 & 2 \\
//!         \hline
//!     \end{tabular}
//! \end{table}
//! ```

use super::cell::{column_spec, row_to_latex, ColumnAlign, SpanCell};
use super::rule::TableRule;
use crate::core::options::{CaptionPosition, RenderOptions};
use crate::core::parser::ParsedTable;
use crate::data::constants::{TABLE_INDENT, TABULAR_INDENT};

/// Render a parsed table as a LaTeX `table`/`tabular` block.
///
/// Returns an empty string when the table has no data rows, whatever the
/// options say.
pub fn render_simple(table: &ParsedTable, options: &RenderOptions) -> String {
    if table.is_empty() {
        return String::new();
    }

    let num_cols = table.col_count() + usize::from(table.has_row_labels());
    let aligns: Vec<ColumnAlign> = (0..num_cols)
        .map(|idx| {
            if idx == 0 && !options.left_centered {
                ColumnAlign::Left
            } else {
                ColumnAlign::Center
            }
        })
        .collect();

    let rule = format!("{}{}", TABULAR_INDENT, TableRule::HLine);
    let mut lines = vec![
        format!("\\begin{{table}}[{}]", options.placement),
        format!("{}\\centering", TABLE_INDENT),
    ];

    if !options.caption.is_empty() && options.caption_position == CaptionPosition::Top {
        lines.push(caption_line(&options.caption));
    }

    lines.push(format!(
        "{}\\begin{{tabular}}{{{}}}",
        TABLE_INDENT,
        column_spec(&aligns)
    ));
    lines.push(rule.clone());

    if let Some(header) = header_cells(table) {
        let rendered: Vec<String> = header.iter().map(SpanCell::to_latex).collect();
        lines.push(format!(
            "{}{}",
            TABULAR_INDENT,
            row_to_latex(rendered.iter().map(String::as_str))
        ));
        lines.push(rule.clone());
    }

    for (idx, row) in table.data.rows().iter().enumerate() {
        let row_label = table
            .row_labels
            .as_ref()
            .map(|labels| labels.get(idx).map_or("", String::as_str));
        let cells = row_label
            .into_iter()
            .chain(row.iter().map(String::as_str));
        lines.push(format!("{}{}", TABULAR_INDENT, row_to_latex(cells)));
        lines.push(rule.clone());
    }

    lines.push(format!("{}\\end{{tabular}}", TABLE_INDENT));

    if !options.caption.is_empty() && options.caption_position == CaptionPosition::Bottom {
        lines.push(caption_line(&options.caption));
    }
    if !options.label.is_empty() {
        lines.push(format!("{}\\label{{{}}}", TABLE_INDENT, options.label));
    }

    lines.push("\\end{table}".to_string());

    tracing::debug!(
        rows = table.row_count(),
        cols = num_cols,
        "rendered simple LaTeX table"
    );
    lines.join("\n")
}

fn caption_line(caption: &str) -> String {
    format!("{}\\caption{{{}}}", TABLE_INDENT, caption)
}

/// Header row cells: a blank corner followed by emphasized column labels.
///
/// With row labels the corner sits above the row-label column and every column
/// label follows it. Without row labels the corner replaces the first label.
fn header_cells(table: &ParsedTable) -> Option<Vec<SpanCell>> {
    let labels = table.column_labels.as_ref()?;
    let skip = usize::from(!table.has_row_labels());

    let mut cells = Vec::with_capacity(labels.len() + 1);
    cells.push(SpanCell::new(String::new()));
    cells.extend(labels.iter().skip(skip).map(|label| SpanCell::label(label)));
    Some(cells)
}
