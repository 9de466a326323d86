//! HTML preview of merged headers
//!
//! The preview lets an editor show what the LaTeX output will merge: one `<th>`
//! per visible header span with `colspan`/`rowspan`, and the body as plain
//! `<td>` cells. Cell text is inserted as-is.

use std::fmt::Write;

use super::grid::{BodyGrid, HeaderGrid};
use super::span::{scan_header_rows, Span};
use crate::data::constants::{PREVIEW_BODY_STYLE, PREVIEW_HEADER_STYLE, PREVIEW_TABLE_STYLE};

/// Render the header spans and the body rows as one HTML `<table>`.
///
/// Returns an empty string when both grids have no rows.
pub fn render_preview_html(header: &HeaderGrid, body: &BodyGrid) -> String {
    if header.is_empty() && body.is_empty() {
        return String::new();
    }

    let mut html = vec![format!("<table style=\"{}\">", PREVIEW_TABLE_STYLE)];

    for cells in scan_header_rows(header) {
        html.push("<tr>".to_string());
        html.extend(
            cells
                .iter()
                .filter(|cell| cell.is_visible())
                .map(|cell| header_cell(&cell.span)),
        );
        html.push("</tr>".to_string());
    }

    for row in body.rows() {
        html.push("<tr>".to_string());
        html.extend(
            row.iter()
                .map(|value| format!("<td style=\"{}\">{}</td>", PREVIEW_BODY_STYLE, value)),
        );
        html.push("</tr>".to_string());
    }

    html.push("</table>".to_string());

    tracing::debug!(
        header_rows = header.row_count(),
        body_rows = body.row_count(),
        "rendered HTML preview"
    );
    html.join("\n")
}

/// One `<th>`; span attributes are only written when greater than one.
fn header_cell(span: &Span) -> String {
    let mut attrs = format!("style=\"{}\"", PREVIEW_HEADER_STYLE);
    if span.col_span > 1 {
        let _ = write!(attrs, " colspan=\"{}\"", span.col_span);
    }
    if span.row_span > 1 {
        let _ = write!(attrs, " rowspan=\"{}\"", span.row_span);
    }
    format!("<th {}>{}</th>", attrs, span.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Grid;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preview_merges_header() {
        let header = Grid::from_strs(&[["A", "A", "B"], ["A", "A", "C"]]);
        let body = Grid::from_strs(&[["1", "2", "3"]]);
        let html = render_preview_html(&header, &body);
        let th = format!("<th style=\"{}\"", PREVIEW_HEADER_STYLE);
        let td = format!("<td style=\"{}\">", PREVIEW_BODY_STYLE);

        let expected = [
            format!("<table style=\"{}\">", PREVIEW_TABLE_STYLE),
            "<tr>".to_string(),
            format!("{} colspan=\"2\" rowspan=\"2\">A</th>", th),
            format!("{}>B</th>", th),
            "</tr>".to_string(),
            "<tr>".to_string(),
            format!("{}>C</th>", th),
            "</tr>".to_string(),
            "<tr>".to_string(),
            format!("{}1</td>", td),
            format!("{}2</td>", td),
            format!("{}3</td>", td),
            "</tr>".to_string(),
            "</table>".to_string(),
        ]
        .join("\n");
        assert_eq!(html, expected);
    }

    #[test]
    fn test_span_attributes_omitted_when_one() {
        let header = Grid::from_strs(&[["x", "y"]]);
        let html = render_preview_html(&header, &Grid::from_strs(&[["1", "2"]]));
        assert!(!html.contains("colspan"));
        assert!(!html.contains("rowspan"));
        assert_eq!(html.matches("<th ").count(), 2);
    }

    #[test]
    fn test_body_is_not_merged() {
        let header = Grid::from_strs(&[["h", "h"]]);
        let body = Grid::from_strs(&[["same", "same"], ["same", "same"]]);
        let html = render_preview_html(&header, &body);
        assert_eq!(html.matches("<td ").count(), 4);
        assert_eq!(html.matches("colspan=\"2\"").count(), 1);
    }

    #[test]
    fn test_blank_body_cells_render_empty() {
        let html = render_preview_html(&Grid::empty(), &Grid::blank(1, 2));
        assert_eq!(
            html.matches(&format!("<td style=\"{}\"></td>", PREVIEW_BODY_STYLE)).count(),
            2
        );
    }

    #[test]
    fn test_empty_grids_render_nothing() {
        assert_eq!(render_preview_html(&Grid::empty(), &Grid::empty()), "");
    }

    #[test]
    fn test_preview_is_idempotent() {
        let header = Grid::from_strs(&[["A", "B"], ["A", "C"]]);
        let body = Grid::from_strs(&[["1", "2"]]);
        assert_eq!(
            render_preview_html(&header, &body),
            render_preview_html(&header, &body)
        );
    }
}
