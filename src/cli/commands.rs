use crate::batch::{self, MoveSummary};
use crate::config::Settings;
use crate::error::Result;
use crate::launch::ShellLauncher;
use crate::logging::RunLog;
use crate::menu::{ChoiceMenu, ChoiceOutcome, ConsolePrompt};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Handyman - handy scripts for everyday folder chores
#[derive(Parser, Debug)]
#[command(name = "handyman", author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List subfolders as numbered options and run the chosen folder's run.bat
    Choice(ChoiceArgs),

    /// Move/rename files listed in a CSV with Source and Destination columns
    Rename(RenameArgs),
}

#[derive(Args, Debug)]
pub struct ChoiceArgs {
    /// Directory whose subfolders are the options (default: Choices)
    #[arg(long = "input_directory", visible_alias = "input-directory", value_name = "DIR")]
    pub input_directory: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// CSV file with Source and Destination columns; relative paths are taken from its folder
    #[arg(long = "input_file", visible_alias = "input-file", value_name = "FILE")]
    pub input_file: PathBuf,

    /// Also append the run log to this file
    #[arg(long = "log_file", visible_alias = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// CLI application
pub struct App {
    settings: Settings,
}

impl App {
    /// Create a new CLI application
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the parsed command
    pub fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Commands::Choice(args) => {
                if let ChoiceOutcome::Launched(script) = self.choice(args.input_directory.as_deref())? {
                    info!("Finished {}", script.display());
                }
            },
            Commands::Rename(args) => {
                self.rename(&args.input_file, args.log_file.as_deref())?;
            },
        }

        Ok(())
    }

    /// Show the folder menu on the terminal and launch the pick
    pub fn choice(&self, input_directory: Option<&Path>) -> Result<ChoiceOutcome> {
        let base = input_directory.unwrap_or(self.settings.choices_dir.as_path());
        info!("Opening choice menu for {}", base.display());

        let mut menu = ChoiceMenu::new(ConsolePrompt::new(), ShellLauncher::new());
        menu.run(base, &mut io::stdout())
    }

    /// Run a batch of moves under a fresh run log
    pub fn rename(&self, input_file: &Path, log_file: Option<&Path>) -> Result<MoveSummary> {
        let log_file = log_file.or(self.settings.log_file.as_deref());
        let log = RunLog::new(log_file)?;

        let summary = log.in_scope(|| batch::rename(input_file))?;

        println!(
            "{}",
            format!(
                "Moved {} file(s): {} directory(ies) created, {} destination(s) replaced.",
                summary.moved, summary.directories_created, summary.replaced
            )
            .green()
        );
        Ok(summary)
    }
}
