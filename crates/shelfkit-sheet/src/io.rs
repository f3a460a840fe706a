//! File access for the spreadsheet stage: the input item list (CSV or
//! workbook), the per-item JSON files, and the CSV output.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SheetError;
use crate::table::Table;

type ItemPages = IndexMap<String, IndexMap<String, Value>>;

/// Extensions read as workbooks; anything else is read as CSV.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads the identifier column from the input spreadsheet.
///
/// Workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read from their
/// first sheet; any other file is read as CSV. Values are trimmed and rows
/// with an empty identifier are dropped. Values are kept as text so leading
/// zeros survive.
///
/// # Errors
///
/// Returns [`SheetError::Workbook`] or [`SheetError::Csv`] if the file cannot
/// be opened or parsed, [`SheetError::EmptyWorkbook`] if a workbook has no
/// sheets, and [`SheetError::MissingColumn`] if `column` is not in the header
/// row.
pub fn read_identifiers(path: &Path, column: &str) -> Result<Vec<String>, SheetError> {
    let is_workbook = path.extension().and_then(|e| e.to_str()).is_some_and(|ext| {
        WORKBOOK_EXTENSIONS
            .iter()
            .any(|w| w.eq_ignore_ascii_case(ext))
    });

    if is_workbook {
        read_workbook_identifiers(path, column)
    } else {
        read_csv_identifiers(path, column)
    }
}

fn read_csv_identifiers(path: &Path, column: &str) -> Result<Vec<String>, SheetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let index = column_index(path, column, reader.headers()?.iter())?;

    let mut identifiers = Vec::new();
    for record in reader.records() {
        let record = record?;
        push_identifier(&mut identifiers, record.get(index).unwrap_or_default());
    }

    Ok(identifiers)
}

fn read_workbook_identifiers(path: &Path, column: &str) -> Result<Vec<String>, SheetError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::EmptyWorkbook {
            path: path.display().to_string(),
        })??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let index = column_index(path, column, header.iter().map(String::as_str))?;

    let mut identifiers = Vec::new();
    for cells in rows {
        let value = cells.get(index).map(cell_text).unwrap_or_default();
        push_identifier(&mut identifiers, &value);
    }

    Ok(identifiers)
}

fn column_index<'a>(
    path: &Path,
    column: &str,
    mut headers: impl Iterator<Item = &'a str>,
) -> Result<usize, SheetError> {
    headers
        .position(|h| h.trim() == column)
        .ok_or_else(|| SheetError::MissingColumn {
            path: path.display().to_string(),
            column: column.to_owned(),
        })
}

fn push_identifier(identifiers: &mut Vec<String>, raw: &str) {
    let value = raw.trim();
    if !value.is_empty() {
        identifiers.push(value.to_owned());
    }
}

/// Renders a workbook cell as text. Whole numbers drop the `.0` that a
/// barcode typed as a number would otherwise carry.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        other => other.to_string(),
    }
}

/// Derives the item identifier from an item file name: everything before the
/// first `_`, then before the first `.`.
///
/// `"0123_serp.json"` and `"0123.json"` both give `"0123"`.
#[must_use]
pub fn identifier_from_file_name(file_name: &str) -> &str {
    let stem = file_name.split('_').next().unwrap_or(file_name);
    stem.split('.').next().unwrap_or(stem)
}

/// Loads every `*.json` file in `dir`, sorted by file name, paired with the
/// identifier taken from its name.
///
/// # Errors
///
/// Returns [`SheetError::Io`] if the directory or a file cannot be read and
/// [`SheetError::ItemFile`] if a file is not a `{url: {field: value}}` object.
pub fn load_item_files(dir: &Path) -> Result<Vec<(String, ItemPages)>, SheetError> {
    let io_err = |path: &Path, source| SheetError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let path = entry.map_err(|e| io_err(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut items = Vec::with_capacity(paths.len());
    for path in paths {
        let content = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        let pages: ItemPages =
            serde_json::from_str(&content).map_err(|e| SheetError::ItemFile {
                path: path.display().to_string(),
                source: e,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let identifier = identifier_from_file_name(&file_name).to_owned();
        tracing::debug!(identifier, pages = pages.len(), "loaded item file");
        items.push((identifier, pages));
    }

    Ok(items)
}

/// Writes `table` as CSV with a header row.
///
/// # Errors
///
/// Returns [`SheetError::Csv`] on any write failure.
pub fn write_table(path: &Path, table: &Table) -> Result<(), SheetError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    for record in table.records() {
        writer.write_record(&record)?;
    }
    writer.flush().map_err(|e| SheetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
