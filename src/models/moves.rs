//! Rows of a move table, before and after path resolution.

use serde::Deserialize;
use std::path::PathBuf;

/// Column holding the path to move from.
pub const SOURCE_COLUMN: &str = "Source";
/// Column holding the path to move to.
pub const DESTINATION_COLUMN: &str = "Destination";

/// A raw table row as written in the CSV. Extra columns are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MoveRow {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Destination")]
    pub destination: String,
}

/// A row whose paths have been resolved against the table's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl MoveRecord {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}
