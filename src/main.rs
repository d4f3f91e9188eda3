mod batch;
mod cli;
mod config;
mod error;
mod launch;
mod logging;
mod menu;
mod models;
#[cfg(test)]
mod test_utils;

use clap::Parser;
use cli::{App, Cli};
use colored::*;
use config::Settings;
use error::Result;
use std::env;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(Settings::load());

    if let Err(e) = run(&app) {
        error!("Command failed: {:?}", e);
        eprintln!("{} {}", "Error:".red().bold(), e.to_string().red());
        process::exit(1);
    }
}

fn run(app: &App) -> Result<()> {
    // Bare invocation goes straight to the menu when the default folder is there.
    if env::args_os().len() == 1 {
        let folder = app.settings().choices_dir.clone();
        if folder.is_dir() {
            println!(
                "No arguments provided. Launching choice menu using \"{}\" folder...",
                folder.display()
            );
            app.choice(Some(folder.as_path()))?;
            return Ok(());
        }
        println!(
            "No arguments provided, and \"{}\" folder not found.",
            folder.display()
        );
    }

    let cli = Cli::parse();
    info!("Running {:?}", cli.command);
    app.run(cli)
}
