//! Plain exports of a parsed table
//!
//! CSV, a bordered HTML table, delimiter-separated text, and writing any
//! rendered string (e.g. a `.tex` file) to disk unchanged. No merge logic here.

use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::parser::ParsedTable;
use crate::utils::error::{TableError, TableResult};

lazy_static! {
    static ref HTML_SPECIAL: Regex = Regex::new(r#"[&<>"']"#).unwrap();
}

/// Escape text for use inside HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    HTML_SPECIAL
        .replace_all(text, |caps: &Captures| match &caps[0] {
            "&" => "&amp;",
            "<" => "&lt;",
            ">" => "&gt;",
            "\"" => "&quot;",
            _ => "&#39;",
        })
        .into_owned()
}

/// Header cells including the index column, if the table has column labels
fn header_record(table: &ParsedTable) -> Option<Vec<&str>> {
    let labels = table.column_labels.as_ref()?;
    let mut record = Vec::with_capacity(labels.len() + 1);
    if table.has_row_labels() {
        record.push(table.index_label.as_deref().unwrap_or(""));
    }
    record.extend(labels.iter().map(String::as_str));
    Some(record)
}

/// Data records with the row label (if any) in front
fn data_records(table: &ParsedTable) -> impl Iterator<Item = Vec<&str>> {
    table.data.rows().iter().enumerate().map(move |(idx, row)| {
        let mut record = Vec::with_capacity(row.len() + 1);
        if let Some(ref labels) = table.row_labels {
            record.push(labels.get(idx).map_or("", String::as_str));
        }
        record.extend(row.iter().map(String::as_str));
        record
    })
}

/// Serialize the table as CSV (header line first when labels exist)
pub fn to_csv(table: &ParsedTable) -> TableResult<String> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::<u8>::new());
    if let Some(header) = header_record(table) {
        writer.write_record(&header)?;
    }
    for record in data_records(table) {
        writer.write_record(&record)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|error| TableError::Io(error.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|error| TableError::invalid(format!("invalid utf-8 csv output: {error}")))
}

/// Serialize the table as a bordered HTML `<table>` with escaped cell text
pub fn to_html(table: &ParsedTable) -> String {
    let mut lines = vec!["<table border=\"1\" class=\"dataframe\">".to_string()];

    if let Some(header) = header_record(table) {
        lines.push("  <thead>".to_string());
        lines.push("    <tr style=\"text-align: center;\">".to_string());
        lines.extend(
            header
                .iter()
                .map(|label| format!("      <th>{}</th>", escape_html(label))),
        );
        lines.push("    </tr>".to_string());
        lines.push("  </thead>".to_string());
    }

    lines.push("  <tbody>".to_string());
    for record in data_records(table) {
        lines.push("    <tr>".to_string());
        lines.extend(
            record
                .iter()
                .map(|value| format!("      <td>{}</td>", escape_html(value))),
        );
        lines.push("    </tr>".to_string());
    }
    lines.push("  </tbody>".to_string());
    lines.push("</table>".to_string());

    lines.join("\n")
}

/// Wrap [`to_html`] in a minimal standalone document
pub fn to_html_document(table: &ParsedTable) -> String {
    format!("<html><body>{}</body></html>", to_html(table))
}

/// Write rendered output to `path` exactly as given (no trailing newline added)
pub fn write_export(path: &Path, contents: &str) -> TableResult<()> {
    fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(())
}
