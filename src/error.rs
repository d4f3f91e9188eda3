//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// The base directory handed to `choice` is missing or not a directory.
    #[error("Invalid directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// The chosen folder has no launch script.
    #[error("No run.bat found in folder: {}", .0.display())]
    MissingRunScript(PathBuf),

    /// The prompt's input stream closed before a valid answer was read.
    #[error("Input closed before a choice was made")]
    InputClosed,

    /// The move table lacks one or more required columns.
    #[error("CSV must have columns: {{Source, Destination}} (missing: {})", join_names(.0))]
    MissingColumns(Vec<String>),

    /// A path cell in the move table is blank.
    #[error("Empty {column} value on line {line}")]
    EmptyCell { line: u64, column: String },

    /// Pre-flight validation found sources that do not exist.
    #[error("The following source files do not exist:\n{}", join_paths(.0))]
    MissingSources(Vec<PathBuf>),

    /// Error while reading the move table (`csv`).
    #[error("CSV Error: {0}")]
    Csv(Arc<csv::Error>),

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// The run log's file sink could not be opened.
    #[error("Log Setup Error: {0}")]
    LogSetup(Arc<tracing_appender::rolling::InitError>),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// --- From implementations ---

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<tracing_appender::rolling::InitError> for AppError {
    fn from(err: tracing_appender::rolling::InitError) -> Self {
        AppError::LogSetup(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sources_lists_one_path_per_line() {
        let err = AppError::MissingSources(vec![PathBuf::from("/a/one.txt"), PathBuf::from("/a/two.txt")]);
        assert_eq!(
            err.to_string(),
            "The following source files do not exist:\n/a/one.txt\n/a/two.txt"
        );
    }

    #[test]
    fn test_missing_columns_names_the_gap() {
        let err = AppError::MissingColumns(vec!["Destination".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("Source, Destination"));
        assert!(msg.ends_with("(missing: Destination)"));
    }

    #[test]
    fn test_io_error_converts_and_clones() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        let copy = err.clone();
        assert!(matches!(copy, AppError::Io(_)));
        assert!(err.to_string().contains("nope"));
    }
}
