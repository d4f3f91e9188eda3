//! The choice menu: pick a subfolder, run its launch script.
//!
//! Every immediate subdirectory of the base directory is an option. The
//! chosen folder must contain [`RUN_SCRIPT`], which is handed to a
//! [`ScriptLauncher`] and waited on.

mod prompt;

pub use prompt::*;

use crate::error::{AppError, Result};
use crate::launch::ScriptLauncher;
use crate::models::ChoiceEntry;
use colored::*;
use std::fs;
use std::io::Write;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File a chosen folder must contain.
pub const RUN_SCRIPT: &str = "run.bat";

const RULE: &str = "--------------------------------------------------------------";
const CHOICE_PROMPT: &str = "Choice";
const PAUSE_MESSAGE: &str = "\nPress any key to exit...";
const SOURCE_LINE: &str = "Source: https://github.com/KarthikAbiram/Handyman";

/// How a menu run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The base directory had no subfolders.
    NothingToChoose,
    /// The script at this path was run.
    Launched(PathBuf),
}

/// Lists the immediate subdirectories of `base`, numbered from 1 in listing order.
pub fn list_choices(base: &Path) -> Result<Vec<ChoiceEntry>> {
    if !base.is_dir() {
        return Err(AppError::InvalidDirectory(base.to_path_buf()));
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(base)? {
        let path = entry?.path();
        if path.is_dir() {
            folders.push(path);
        }
    }

    Ok(folders
        .into_iter()
        .enumerate()
        .map(|(idx, path)| ChoiceEntry::new(idx + 1, path))
        .collect())
}

/// Asks until the answer is an integer in `1..=count`.
///
/// Bad answers are reported on `out` and asked again; only a closed input
/// stream ends the loop early.
pub fn read_selection<P, W>(prompt: &mut P, out: &mut W, count: usize) -> Result<usize>
where
    P: Prompt + ?Sized,
    W: Write,
{
    loop {
        let Some(answer) = prompt.read_line(CHOICE_PROMPT)? else {
            return Err(AppError::InputClosed);
        };

        match answer.trim().parse::<i64>() {
            Ok(n) if n >= 1 && (n as u64) <= count as u64 => return Ok(n as usize),
            Ok(_) => writeln!(out, "Invalid option. Try again.")?,
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                writeln!(out, "Invalid option. Try again.")?
            },
            Err(_) => writeln!(out, "Please enter a valid number.")?,
        }
    }
}

/// Interactive launcher over a base directory.
pub struct ChoiceMenu<P, L> {
    prompt: P,
    launcher: L,
}

impl<P: Prompt, L: ScriptLauncher> ChoiceMenu<P, L> {
    pub fn new(prompt: P, launcher: L) -> Self {
        Self { prompt, launcher }
    }

    /// Runs the menu once against `base`, writing the listing to `out`.
    pub fn run<W: Write>(&mut self, base: &Path, out: &mut W) -> Result<ChoiceOutcome> {
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "{}",
            "Welcome to Handyman - An Open Source tool with handy scripts"
                .cyan()
                .bold()
        )?;
        writeln!(out, "{}", SOURCE_LINE)?;
        writeln!(out, "{}", RULE)?;

        let choices = list_choices(base)?;
        debug!("Found {} folder(s) under {}", choices.len(), base.display());

        if choices.is_empty() {
            writeln!(out, "No subfolders found. Nothing to choose from.")?;
            return Ok(ChoiceOutcome::NothingToChoose);
        }

        writeln!(out, "\nAvailable options:")?;
        for entry in &choices {
            writeln!(out, "{}. {}", entry.ordinal, entry.name())?;
        }
        writeln!(out)?;
        out.flush()?;

        let selected = read_selection(&mut self.prompt, out, choices.len())?;
        let folder = &choices[selected - 1];
        let script = folder.script_path(RUN_SCRIPT);

        if !script.is_file() {
            return Err(AppError::MissingRunScript(folder.path.clone()));
        }

        writeln!(out, "\nExecuting: {}", script.display())?;
        out.flush()?;
        info!("Selected option {} ({})", selected, folder.name());

        self.launcher.launch(&script)?;
        self.prompt.pause(PAUSE_MESSAGE)?;

        Ok(ChoiceOutcome::Launched(script))
    }

    /// Consumes the menu and hands back its collaborators.
    #[cfg(test)]
    pub fn into_parts(self) -> (P, L) {
        (self.prompt, self.launcher)
    }
}
