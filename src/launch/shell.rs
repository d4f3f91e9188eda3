//! Launches scripts through the platform's command interpreter.

use super::ScriptLauncher;
use crate::error::Result;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Hands scripts to `cmd /C` on Windows and `sh` everywhere else.
///
/// The child inherits stdio and the current working directory, and the
/// caller blocks until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl ShellLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(script: &Path) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(script);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg(script);
            cmd
        }
    }

    /// Runs the script and hands back its exit status.
    pub fn run(&self, script: &Path) -> Result<ExitStatus> {
        info!("Launching script: {}", script.display());
        let status = Self::command(script).status()?;
        debug!("Script {} exited with {}", script.display(), status);
        Ok(status)
    }
}

impl ScriptLauncher for ShellLauncher {
    fn launch(&self, script: &Path) -> Result<()> {
        self.run(script).map(|_| ())
    }
}
