//! webclip CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod prompt;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use webclip::{observability, WebclipConfig, WebclipError};

use commands::{DiffCommand, GenerateCommand};

#[derive(Parser)]
#[command(name = "webclip")]
#[command(version)]
#[command(about = "Generate Obsidian Web Clipper templates into a vault", long_about = None)]
struct Cli {
    /// Configuration file (merged over ./webclip.toml and the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every template and the import guidance into a vault
    Generate {
        /// Vault root (prompted for when omitted)
        #[arg(long)]
        root: Option<String>,
        /// Create a missing root without asking
        #[arg(short, long)]
        yes: bool,
        /// Skip the Clippings/TEMPLATES copies
        #[arg(long)]
        no_aggregate: bool,
    },
    /// List the built-in templates
    List,
    /// Show which templates in a vault differ from the built-in ones
    Diff {
        /// Vault root
        #[arg(long)]
        root: PathBuf,
        /// Ignore the Clippings/TEMPLATES copies
        #[arg(long)]
        no_aggregate: bool,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors share the exit code of every other failure
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config =
        WebclipConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    observability::init(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Generate {
            root,
            yes,
            no_aggregate,
        } => GenerateCommand::new(root, yes, no_aggregate, &config).execute()?,
        Commands::List => commands::list::execute()?,
        Commands::Diff { root, no_aggregate } => {
            DiffCommand::new(root, no_aggregate, &config).execute()?;
        }
    }

    Ok(())
}

/// Tell the operator what went wrong and pick the exit code
fn report(err: &anyhow::Error) -> ExitCode {
    let webclip_err = err.downcast_ref::<WebclipError>();

    if matches!(webclip_err, Some(WebclipError::Aborted)) {
        println!("Aborted by user.");
    } else {
        eprintln!("{} {err:#}", style("Error:").red().bold());
    }

    ExitCode::from(webclip_err.map_or(1, WebclipError::exit_code))
}
