//! Python bindings for tabtex
//!
//! Grids are passed as lists of lists; cells may be `str`, numbers, `bool` or
//! `None` and go through the same conversion as JSON grids.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use tabtex::{
    CaptionPosition, ComplexOptions, Grid, ParseOptions, ParsedTable, Placement, RenderOptions,
    TableError,
};

fn to_py_err(error: TableError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

/// Convert a Python list of lists into a rectangular grid
fn extract_grid(rows: &Bound<'_, PyAny>) -> PyResult<Grid> {
    let rows: Vec<Vec<Bound<'_, PyAny>>> = rows.extract()?;
    let rows = rows
        .into_iter()
        .map(|row| row.iter().map(cell_value).collect::<PyResult<Vec<_>>>())
        .collect::<PyResult<Vec<_>>>()?;
    Grid::from_json_rows(rows).map_err(to_py_err)
}

fn cell_value(cell: &Bound<'_, PyAny>) -> PyResult<serde_json::Value> {
    if cell.is_none() {
        Ok(serde_json::Value::Null)
    } else if let Ok(text) = cell.extract::<String>() {
        Ok(serde_json::Value::String(text))
    } else if let Ok(flag) = cell.extract::<bool>() {
        Ok(serde_json::Value::Bool(flag))
    } else if let Ok(int) = cell.extract::<i64>() {
        Ok(int.into())
    } else if let Ok(float) = cell.extract::<f64>() {
        Ok(serde_json::Number::from_f64(float)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null))
    } else {
        Ok(serde_json::Value::String(cell.str()?.to_string()))
    }
}

fn parsed_table_to_dict<'py>(py: Python<'py>, table: &ParsedTable) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("column_labels", table.column_labels.clone())?;
    dict.set_item("row_labels", table.row_labels.clone())?;
    dict.set_item("index_label", table.index_label.clone())?;
    dict.set_item("data", table.data.rows().to_vec())?;
    Ok(dict)
}

/// Parse pasted text into a dict with `column_labels`, `row_labels`,
/// `index_label` and `data`.
#[pyfunction]
#[pyo3(signature = (text, header=true, index=false, delimiter='\t'))]
fn parse<'py>(
    py: Python<'py>,
    text: &str,
    header: bool,
    index: bool,
    delimiter: char,
) -> PyResult<Bound<'py, PyDict>> {
    let table = tabtex::parse_with_options(
        text,
        &ParseOptions {
            delimiter,
            first_row_as_header: header,
            first_column_as_index: index,
        },
    );
    parsed_table_to_dict(py, &table)
}

/// Parse pasted text and render it as a LaTeX table
#[pyfunction]
#[pyo3(signature = (
    text,
    header=true,
    index=false,
    caption="",
    label="",
    placement="h",
    caption_position="top",
    left_centered=false
))]
#[allow(clippy::too_many_arguments)]
fn render_simple(
    text: &str,
    header: bool,
    index: bool,
    caption: &str,
    label: &str,
    placement: &str,
    caption_position: &str,
    left_centered: bool,
) -> PyResult<String> {
    let table = tabtex::parse(text, header, index);
    let options = RenderOptions {
        caption: caption.to_string(),
        label: label.to_string(),
        placement: placement.parse::<Placement>().map_err(to_py_err)?,
        caption_position: caption_position
            .parse::<CaptionPosition>()
            .map_err(to_py_err)?,
        left_centered,
    };
    Ok(tabtex::render_simple(&table, &options))
}

/// Render the merged-header HTML preview
#[pyfunction]
fn render_preview_html(header: &Bound<'_, PyAny>, body: &Bound<'_, PyAny>) -> PyResult<String> {
    let header = extract_grid(header)?;
    let body = extract_grid(body)?;
    Ok(tabtex::render_preview_html(&header, &body))
}

/// Render merged-header LaTeX
#[pyfunction]
#[pyo3(signature = (header, body, caption="", label="", placement=None))]
fn render_complex_latex(
    header: &Bound<'_, PyAny>,
    body: &Bound<'_, PyAny>,
    caption: &str,
    label: &str,
    placement: Option<&str>,
) -> PyResult<String> {
    let header = extract_grid(header)?;
    let body = extract_grid(body)?;
    let placement = match placement {
        Some(token) => Placement::parse_optional(token).map_err(to_py_err)?,
        None => None,
    };
    let options = ComplexOptions {
        caption: caption.to_string(),
        label: label.to_string(),
        placement,
    };
    Ok(tabtex::render_complex_latex(&header, &body, &options))
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(render_simple, m)?)?;
    m.add_function(wrap_pyfunction!(render_preview_html, m)?)?;
    m.add_function(wrap_pyfunction!(render_complex_latex, m)?)?;
    Ok(())
}
