//! Batch rename/move driven by a CSV table.
//!
//! The run is all-or-nothing on validation only: every source must exist
//! before the first move, but a failure halfway through leaves earlier moves
//! in place.

mod mover;
mod paths;
mod table;

pub use mover::*;
pub use paths::*;
pub use table::*;

use crate::error::Result;
use crate::models::MoveRecord;
use std::path::Path;
use tracing::info;

/// Counts from a completed batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveSummary {
    pub moved: usize,
    pub directories_created: usize,
    pub replaced: usize,
}

/// Reads the table and resolves every row against the table's directory.
pub fn load_moves(table: &Path) -> Result<Vec<MoveRecord>> {
    let rows = read_move_table(table)?;
    let base = table_base_dir(table)?;

    Ok(rows
        .iter()
        .map(|row| {
            MoveRecord::new(
                resolve_entry(&base, &row.source),
                resolve_entry(&base, &row.destination),
            )
        })
        .collect())
}

/// Runs the whole batch described by `table`.
///
/// Logs through whatever `tracing` dispatcher is current; the CLI wraps this
/// in a [`crate::logging::RunLog`] scope.
pub fn rename(table: &Path) -> Result<MoveSummary> {
    let records = load_moves(table)?;
    preflight(&records)?;

    let summary = apply(&records)?;
    info!("All files successfully moved/renamed.");
    Ok(summary)
}
