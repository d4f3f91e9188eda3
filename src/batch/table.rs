//! Reading the move table.

use crate::error::{AppError, Result};
use crate::models::{MoveRow, DESTINATION_COLUMN, SOURCE_COLUMN};
use std::path::Path;
use tracing::{debug, error};

/// Reads every row of the CSV at `path`.
///
/// The header must name both the `Source` and `Destination` columns; other
/// columns are ignored. Blank path cells are rejected. Nothing on disk is
/// touched besides reading the table.
pub fn read_move_table(path: &Path) -> Result<Vec<MoveRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let missing: Vec<String> = [SOURCE_COLUMN, DESTINATION_COLUMN]
        .into_iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        error!(
            "CSV missing required columns: {{{}, {}}}",
            SOURCE_COLUMN, DESTINATION_COLUMN
        );
        return Err(AppError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: MoveRow = record.deserialize(Some(&headers))?;

        for (column, value) in [(SOURCE_COLUMN, &row.source), (DESTINATION_COLUMN, &row.destination)] {
            if value.trim().is_empty() {
                error!("Empty {} value on line {}", column, line);
                return Err(AppError::EmptyCell {
                    line,
                    column: column.to_string(),
                });
            }
        }
        rows.push(row);
    }

    debug!("Read {} row(s) from {}", rows.len(), path.display());
    Ok(rows)
}
