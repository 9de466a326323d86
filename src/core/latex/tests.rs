//! Tests for LaTeX table rendering

use pretty_assertions::assert_eq;

use super::cell::{ColumnAlign, SpanCell};
use super::complex::render_complex_latex;
use super::rule::TableRule;
use super::simple::render_simple;
use crate::core::grid::Grid;
use crate::core::options::{CaptionPosition, ComplexOptions, Placement, RenderOptions};
use crate::core::parser::{parse, ParsedTable};

fn labelled_table() -> ParsedTable {
    parse("\tX\tY\nR1\t1\t2\nR2\t3\t4", true, true)
}

// ============================================================================
// Cells and rules
// ============================================================================

#[test]
fn test_cell_plain() {
    assert_eq!(SpanCell::new("A").to_latex(), "A");
}

#[test]
fn test_cell_colspan() {
    let cell = SpanCell::merged("Header", 1, 2);
    assert_eq!(cell.to_latex(), "\\multicolumn{2}{c}{Header}");
}

#[test]
fn test_cell_rowspan_inside_colspan() {
    let cell = SpanCell::merged("A", 2, 3);
    assert_eq!(cell.to_latex(), "\\multicolumn{3}{c}{\\multirow{2}{*}{A}}");
}

#[test]
fn test_cell_alignment_in_multicolumn() {
    let mut cell = SpanCell::merged("L", 1, 2);
    cell.align = ColumnAlign::Left;
    assert_eq!(cell.to_latex(), "\\multicolumn{2}{l}{L}");
}

#[test]
fn test_emphasized_cell() {
    assert_eq!(SpanCell::label("Name").to_latex(), "\\text{Name}");
}

#[test]
fn test_rules() {
    assert_eq!(TableRule::HLine.to_string(), "\\hline");
    assert_eq!(TableRule::Top.to_string(), "\\toprule");
    assert_eq!(TableRule::Mid.to_string(), "\\midrule");
    assert_eq!(TableRule::Bottom.to_string(), "\\bottomrule");
    assert_eq!(TableRule::under_columns(1, 3).to_string(), "\\cmidrule(lr){2-3}");
    assert_eq!(TableRule::under_columns(0, 6).to_string(), "\\cmidrule(lr){1-6}");
}

// ============================================================================
// Simple renderer
// ============================================================================

#[test]
fn test_simple_with_row_labels() {
    let latex = render_simple(&labelled_table(), &RenderOptions::default());
    let expected = r"\begin{table}[h]
    \centering
    \begin{tabular}{lcc}
        \hline
         & \text{X} & \text{Y} \\
        \hline
        R1 & 1 & 2 \\
        \hline
        R2 & 3 & 4 \\
        \hline
    \end{tabular}
\end{table}";
    assert_eq!(latex, expected);
}

#[test]
fn test_simple_corner_replaces_first_label_without_index() {
    let table = parse("Name\tAge\tScore\nAlice\t30\t98", true, false);
    let latex = render_simple(&table, &RenderOptions::default());
    assert!(latex.contains("\\begin{tabular}{lcc}"));
    assert!(latex.contains("         & \\text{Age} & \\text{Score} \\\\"));
    assert!(!latex.contains("\\text{Name}"));
    assert!(latex.contains("        Alice & 30 & 98 \\\\"));
}

#[test]
fn test_simple_without_header_row() {
    let table = parse("a\tb\nc\td", false, false);
    let latex = render_simple(&table, &RenderOptions::default());
    assert!(!latex.contains("\\text{"));
    assert_eq!(latex.matches("\\hline").count(), 3);
}

#[test]
fn test_simple_empty_table_renders_nothing() {
    let options = RenderOptions {
        caption: "Caption".to_string(),
        label: "tab:x".to_string(),
        placement: Placement::Page,
        caption_position: CaptionPosition::Bottom,
        left_centered: true,
    };
    assert_eq!(render_simple(&ParsedTable::default(), &options), "");
    // Header only: still zero data rows
    assert_eq!(render_simple(&parse("A\tB", true, false), &options), "");
}

#[test]
fn test_simple_caption_top() {
    let options = RenderOptions {
        caption: "Results".to_string(),
        label: "tab:results".to_string(),
        ..RenderOptions::default()
    };
    let latex = render_simple(&labelled_table(), &options);
    let lines: Vec<&str> = latex.lines().collect();
    assert_eq!(lines[1], "    \\centering");
    assert_eq!(lines[2], "    \\caption{Results}");
    assert_eq!(lines[lines.len() - 3], "    \\end{tabular}");
    assert_eq!(lines[lines.len() - 2], "    \\label{tab:results}");
}

#[test]
fn test_simple_caption_bottom() {
    let options = RenderOptions {
        caption: "Results".to_string(),
        label: "tab:results".to_string(),
        caption_position: CaptionPosition::Bottom,
        placement: Placement::Top,
        ..RenderOptions::default()
    };
    let latex = render_simple(&labelled_table(), &options);
    let lines: Vec<&str> = latex.lines().collect();
    assert_eq!(lines[0], "\\begin{table}[t]");
    assert_eq!(lines[2], "    \\begin{tabular}{lcc}");
    assert_eq!(
        &lines[lines.len() - 4..],
        &[
            "    \\end{tabular}",
            "    \\caption{Results}",
            "    \\label{tab:results}",
            "\\end{table}",
        ]
    );
}

#[test]
fn test_simple_left_centered() {
    let options = RenderOptions {
        left_centered: true,
        ..RenderOptions::default()
    };
    let latex = render_simple(&labelled_table(), &options);
    assert!(latex.contains("\\begin{tabular}{ccc}"));
}

#[test]
fn test_simple_is_idempotent() {
    let options = RenderOptions {
        caption: "Same".to_string(),
        ..RenderOptions::default()
    };
    let table = labelled_table();
    assert_eq!(render_simple(&table, &options), render_simple(&table, &options));
}

// ============================================================================
// Merged-header renderer
// ============================================================================

#[test]
fn test_complex_two_row_merge() {
    let header = Grid::from_strs(&[["A", "A", "B"], ["A", "A", "C"]]);
    let body = Grid::from_strs(&[["1", "2", "3"]]);
    let options = ComplexOptions {
        caption: "Cap".to_string(),
        label: "tab:x".to_string(),
        placement: Some(Placement::Top),
    };
    let expected = r"\begin{table}[t]
\centering
\caption{Cap}
\label{tab:x}
\begin{tabular}{ccc}
\toprule
\multicolumn{2}{c}{\multirow{2}{*}{A}} & B \\
\cmidrule(lr){1-2}
\multicolumn{2}{c}{} & C \\
\midrule
1 & 2 & 3 \\
\bottomrule
\end{tabular}
\end{table}";
    assert_eq!(render_complex_latex(&header, &body, &options), expected);
}

#[test]
fn test_complex_deep_sea_header() {
    let header = Grid::from_strs(&[
        ["観測コード", "水温 (C)", "水温 (C)", "塩分濃度", "塩分濃度", "深度"],
        ["観測コード", "エリアA", "エリアB", "ゾーンX", "ゾーンY", "トレンチZ"],
    ]);
    let body = Grid::from_strs(&[
        ["データセット X01", "5.1", "1.3", "34.90", "35.15", "9870.5"],
        ["解析セット S02", "22.8", "7.7", "33.05", "36.88", "1234.9"],
    ]);
    let latex = render_complex_latex(&header, &body, &ComplexOptions::default());
    let lines: Vec<&str> = latex.lines().collect();

    assert_eq!(lines[0], "\\begin{table}");
    assert_eq!(lines[2], "\\begin{tabular}{cccccc}");
    assert_eq!(
        lines[4],
        "\\multirow{2}{*}{観測コード} & \\multicolumn{2}{c}{水温 (C)} & \\multicolumn{2}{c}{塩分濃度} & 深度 \\\\"
    );
    assert_eq!(lines[5], "\\cmidrule(lr){2-3} \\cmidrule(lr){4-5}");
    assert_eq!(lines[6], " & エリアA & エリアB & ゾーンX & ゾーンY & トレンチZ \\\\");
    assert_eq!(lines[7], "\\midrule");
    assert_eq!(lines[8], "データセット X01 & 5.1 & 1.3 & 34.90 & 35.15 & 9870.5 \\\\");
}

#[test]
fn test_complex_blank_run_gets_no_cmidrule() {
    let header = Grid::from_strs(&[["", "", "T"], ["a", "b", "c"]]);
    let body = Grid::from_strs(&[["1", "2", "3"]]);
    let latex = render_complex_latex(&header, &body, &ComplexOptions::default());
    assert!(latex.contains("\\multicolumn{2}{c}{} & T \\\\"));
    assert!(!latex.contains("\\cmidrule"));
}

#[test]
fn test_complex_last_header_row_gets_no_cmidrule() {
    let header = Grid::from_strs(&[["G", "G", "H"]]);
    let body = Grid::from_strs(&[["1", "2", "3"]]);
    let latex = render_complex_latex(&header, &body, &ComplexOptions::default());
    assert!(latex.contains("\\multicolumn{2}{c}{G} & H \\\\"));
    assert!(!latex.contains("\\cmidrule"));
}

#[test]
fn test_complex_rules_appear_exactly_once() {
    let body = Grid::from_strs(&[["1", "2"], ["3", "4"]]);
    for header_rows in 0..4 {
        let header = Grid::blank(header_rows, 2);
        let latex = render_complex_latex(&header, &body, &ComplexOptions::default());
        assert_eq!(latex.matches("\\toprule").count(), 1, "{header_rows} rows");
        assert_eq!(latex.matches("\\midrule").count(), 1, "{header_rows} rows");
        assert_eq!(latex.matches("\\bottomrule").count(), 1, "{header_rows} rows");
    }
}

#[test]
fn test_complex_column_count_follows_body() {
    let header = Grid::from_strs(&[["A", "B"]]);
    let body = Grid::from_strs(&[["1", "2", "3"]]);
    let latex = render_complex_latex(&header, &body, &ComplexOptions::default());
    assert!(latex.contains("\\begin{tabular}{ccc}"));
    assert!(latex.contains("A & B \\\\"));
    assert!(latex.contains("1 & 2 & 3 \\\\"));
}

#[test]
fn test_complex_empty_body_renders_nothing() {
    let header = Grid::from_strs(&[["A", "B"]]);
    assert_eq!(
        render_complex_latex(&header, &Grid::blank(0, 2), &ComplexOptions::default()),
        ""
    );
}

#[test]
fn test_complex_is_idempotent() {
    let header = Grid::from_strs(&[["A", "A"], ["x", "y"]]);
    let body = Grid::from_strs(&[["1", "2"]]);
    let options = ComplexOptions {
        placement: Some(Placement::Here),
        ..ComplexOptions::default()
    };
    assert_eq!(
        render_complex_latex(&header, &body, &options),
        render_complex_latex(&header, &body, &options)
    );
}
