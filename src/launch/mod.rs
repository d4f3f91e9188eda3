//! Runs launch scripts as child processes.
//!
//! Includes:
//! - `ScriptLauncher`: the capability the choice menu depends on.
//! - `shell`: launcher backed by the platform shell.

mod shell;

pub use shell::*;

use crate::error::Result;
use std::path::Path;

/// Something that can run a script file and wait for it to finish.
pub trait ScriptLauncher {
    /// Runs `script` to completion. The script's exit status is not an error.
    fn launch(&self, script: &Path) -> Result<()>;
}
