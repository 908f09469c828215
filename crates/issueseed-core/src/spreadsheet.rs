// SPDX-License-Identifier: Apache-2.0

//! Spreadsheet loading.
//!
//! Reads `.csv` files with the `csv` crate and every other workbook format
//! (`.xlsx`, `.xlsm`, `.xls`, `.ods`) with `calamine`. The first row is the
//! header; the four required columns must be present by exact name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, instrument};

use crate::Result;
use crate::error::SeederError;
use crate::task::{OPTIONAL_COLUMNS, REQUIRED_COLUMNS, TaskRow};

/// A header row plus raw cell text for every data row.
#[derive(Debug, Default)]
struct Table {
    headers: Vec<String>,
    records: Vec<Vec<Option<String>>>,
}

impl Table {
    fn column_index(&self) -> HashMap<&str, usize> {
        let mut index = HashMap::new();
        for (i, name) in self.headers.iter().enumerate() {
            index.entry(name.as_str()).or_insert(i);
        }
        index
    }

    fn missing_required(&self) -> Vec<String> {
        let index = self.column_index();
        REQUIRED_COLUMNS
            .iter()
            .filter(|name| !index.contains_key(*name))
            .map(|name| (*name).to_string())
            .collect()
    }

    fn into_rows(self) -> Vec<TaskRow> {
        let index = self.column_index();
        let absent: Vec<&str> = OPTIONAL_COLUMNS
            .iter()
            .copied()
            .filter(|name| !index.contains_key(name))
            .collect();
        if !absent.is_empty() {
            debug!(columns = ?absent, "Optional columns absent, treating as empty");
        }

        self.records
            .iter()
            .filter(|record| record.iter().any(Option::is_some))
            .map(|record| {
                TaskRow::from_lookup(|name| {
                    index
                        .get(name)
                        .and_then(|&i| record.get(i))
                        .cloned()
                        .flatten()
                })
            })
            .collect()
    }
}

/// Loads every task row from a spreadsheet.
///
/// # Arguments
///
/// * `path` - Spreadsheet file
/// * `sheet` - Worksheet name; the first worksheet when `None` (ignored for CSV)
///
/// # Errors
///
/// - [`SeederError::SpreadsheetNotFound`] if `path` does not exist (checked before parsing)
/// - [`SeederError::MissingColumns`] if any required column is absent
/// - [`SeederError::Spreadsheet`] if the file cannot be parsed
#[instrument(skip(path), fields(path = %path.display()))]
pub fn read_tasks(path: &Path, sheet: Option<&str>) -> Result<Vec<TaskRow>> {
    if !path.exists() {
        return Err(SeederError::SpreadsheetNotFound {
            path: path.to_path_buf(),
        });
    }

    let table = if is_csv(path) {
        read_csv(path)?
    } else {
        read_workbook(path, sheet)?
    };

    let missing = table.missing_required();
    if !missing.is_empty() {
        return Err(SeederError::MissingColumns { columns: missing });
    }

    let rows = table.into_rows();
    debug!(rows = rows.len(), "Loaded spreadsheet");
    Ok(rows)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn spreadsheet_error(path: &Path, err: impl std::fmt::Display) -> SeederError {
    SeederError::Spreadsheet {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}

fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| spreadsheet_error(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| spreadsheet_error(path, e))?
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| spreadsheet_error(path, e))?;
        records.push(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect(),
        );
    }

    Ok(Table { headers, records })
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(path, e))?;

    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| spreadsheet_error(path, e))?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| spreadsheet_error(path, "workbook has no worksheets"))?
            .map_err(|e| spreadsheet_error(path, e))?,
    };

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Table::default());
    };

    let headers = header_row
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();
    let records = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(Table { headers, records })
}

/// Coerces a workbook cell to text; `None` for empty cells.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Whole numbers lose their fractional part so `1.0` reads as week `1`.
#[allow(clippy::cast_possible_truncation)]
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}
