//! Runtime settings read from the environment.
//!
//! A `.env` file in the working directory is loaded first (if present), so
//! the same variables can be pinned per folder.

use std::env;
use std::path::PathBuf;

/// Folder the choice menu uses when none is given.
pub const DEFAULT_CHOICES_DIR: &str = "Choices";

const CHOICES_DIR_VAR: &str = "HANDYMAN_CHOICES_DIR";
const LOG_FILE_VAR: &str = "HANDYMAN_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base directory for `choice` and the no-argument launch.
    pub choices_dir: PathBuf,
    /// Log file for `rename` when `--log_file` is not passed.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            choices_dir: PathBuf::from(DEFAULT_CHOICES_DIR),
            log_file: None,
        }
    }
}

impl Settings {
    /// Loads `.env` and reads the `HANDYMAN_*` variables.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Reads the `HANDYMAN_*` variables; unset or empty values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            choices_dir: non_empty_var(CHOICES_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.choices_dir),
            log_file: non_empty_var(LOG_FILE_VAR).map(PathBuf::from),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
