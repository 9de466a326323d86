//! WASM bindings for tabtex
//!
//! This module provides JavaScript-accessible functions for the table editor:
//! parsing pasted text, rendering LaTeX and the HTML preview, and exports.
//! Grids cross the boundary as arrays of arrays; options as plain objects whose
//! missing fields take their defaults.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{
    export, parse_with_options, render_complex_latex, render_preview_html, render_simple,
    ComplexOptions, Grid, ParseOptions, ParsedTable, RenderOptions, TableError,
};

/// Result of a paste-to-LaTeX call
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered output
    pub output: String,
    /// Whether rendering succeeded
    pub success: bool,
    /// Error message if rendering failed
    pub error: Option<String>,
}

#[cfg(feature = "wasm")]
impl RenderResult {
    fn from_result(result: Result<String, TableError>) -> Self {
        match result {
            Ok(output) => RenderResult {
                output,
                success: true,
                error: None,
            },
            Err(e) => RenderResult {
                output: String::new(),
                success: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[cfg(feature = "wasm")]
fn decode<T: DeserializeOwned>(value: JsValue) -> Result<T, TableError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| TableError::InvalidInput(e.to_string()))
}

/// `undefined`/`null` options mean all defaults
#[cfg(feature = "wasm")]
fn decode_options<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, TableError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    decode(value)
}

/// Parse pasted text into a table object
/// (`{ column_labels, row_labels, index_label, data }`)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseTable")]
pub fn parse_table_wasm(text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options: ParseOptions = decode_options(options).map_err(js_error)?;
    let table = parse_with_options(text, &options);
    serde_wasm_bindgen::to_value(&table).map_err(js_error)
}

/// Render a parsed table object as LaTeX
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderSimple")]
pub fn render_simple_wasm(table: JsValue, options: JsValue) -> JsValue {
    let result = decode::<ParsedTable>(table).and_then(|table| {
        let options: RenderOptions = decode_options(options)?;
        Ok(render_simple(&table, &options))
    });

    serde_wasm_bindgen::to_value(&RenderResult::from_result(result)).unwrap_or(JsValue::NULL)
}

/// Render the merged-header HTML preview
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderPreviewHtml")]
pub fn render_preview_html_wasm(header: JsValue, body: JsValue) -> Result<String, JsValue> {
    let header: Grid = decode(header).map_err(js_error)?;
    let body: Grid = decode(body).map_err(js_error)?;
    Ok(render_preview_html(&header, &body))
}

/// Render merged-header LaTeX
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderComplexLatex")]
pub fn render_complex_latex_wasm(
    header: JsValue,
    body: JsValue,
    options: JsValue,
) -> Result<String, JsValue> {
    let header: Grid = decode(header).map_err(js_error)?;
    let body: Grid = decode(body).map_err(js_error)?;
    let options: ComplexOptions = decode_options(options).map_err(js_error)?;
    Ok(render_complex_latex(&header, &body, &options))
}

/// Export a parsed table object as CSV
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "exportCsv")]
pub fn export_csv_wasm(table: JsValue) -> Result<String, JsValue> {
    let table: ParsedTable = decode(table).map_err(js_error)?;
    export::to_csv(&table).map_err(js_error)
}

/// Export a parsed table object as an HTML `<table>`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "exportHtml")]
pub fn export_html_wasm(table: JsValue) -> Result<String, JsValue> {
    let table: ParsedTable = decode(table).map_err(js_error)?;
    Ok(export::to_html(&table))
}

/// A `rows × cols` grid of empty strings for a fresh editor
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "blankGrid")]
pub fn blank_grid_wasm(rows: usize, cols: usize) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Grid::blank(rows, cols)).map_err(js_error)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
