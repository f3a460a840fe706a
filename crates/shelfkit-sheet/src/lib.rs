//! Spreadsheet assembly for scraped product data.
//!
//! Per-item JSON files are turned into one [`Table`] (one row per scraped
//! URL), noisy columns are dropped, and alias columns are folded into
//! canonical ones before the table is written as CSV.

pub mod error;
pub mod io;
pub mod reconcile;
pub mod table;

use std::path::Path;

pub use error::SheetError;
pub use io::{identifier_from_file_name, load_item_files, read_identifiers, write_table};
pub use reconcile::{build_table, reconcile, AliasGroup, ALIAS_GROUPS, DENIED_COLUMNS};
pub use table::Table;

/// Reads every item file under `json_dir` and returns the reconciled table.
///
/// # Errors
///
/// Returns [`SheetError`] if the directory or any item file cannot be read
/// or parsed.
pub fn assemble(json_dir: &Path) -> Result<Table, SheetError> {
    let items = load_item_files(json_dir)?;
    let mut table = build_table(&items);
    reconcile(&mut table);
    Ok(table)
}

/// Assembles `json_dir` and writes the result to `output`. Returns the number
/// of data rows written.
///
/// # Errors
///
/// Returns [`SheetError`] on any read, parse, or write failure.
pub fn export(json_dir: &Path, output: &Path) -> Result<usize, SheetError> {
    let table = assemble(json_dir)?;
    write_table(output, &table)?;
    tracing::info!(
        rows = table.len(),
        columns = table.columns().len(),
        output = %output.display(),
        "wrote product spreadsheet"
    );
    Ok(table.len())
}
