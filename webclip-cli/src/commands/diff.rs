//! Show how a vault's templates differ from the built-in ones
//!
//! `generate` overwrites without asking; run this first to see which
//! templates were customized in place.

use anyhow::Result;
use console::{style, Emoji};
use similar::{ChangeTag, TextDiff};
use std::path::PathBuf;
use webclip::emitter::{EmitOptions, Emitter, FileState, FileStatus};
use webclip::{TemplateRegistry, WebclipConfig, WebclipError};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "");

/// Compare a vault against the registry
pub struct DiffCommand {
    root: PathBuf,
    aggregate: bool,
}

impl DiffCommand {
    /// Create a command for `root`
    pub const fn new(root: PathBuf, no_aggregate: bool, config: &WebclipConfig) -> Self {
        Self {
            root,
            aggregate: config.output.aggregate && !no_aggregate,
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(WebclipError::InvalidInput(format!(
                "'{}' is not a directory",
                self.root.display()
            ))
            .into());
        }

        let registry = TemplateRegistry::builtin()?;
        let emitter = Emitter::new(&self.root, EmitOptions { aggregate: self.aggregate });
        let statuses = emitter.inspect(&registry)?;

        let mut missing = 0;
        let mut modified = 0;
        for status in &statuses {
            match &status.state {
                FileState::UpToDate => {
                    println!("  {CHECK}{}", style(status.path.display()).dim());
                }
                FileState::Missing => {
                    missing += 1;
                    println!(
                        "  {CROSS}{} {}",
                        style(status.path.display()).red(),
                        style("(missing)").dim()
                    );
                }
                FileState::Modified { on_disk } => {
                    modified += 1;
                    print_diff(status, on_disk);
                }
            }
        }

        println!();
        println!(
            "{} files checked: {} modified, {} missing",
            statuses.len(),
            style(modified).yellow(),
            style(missing).red()
        );
        if modified > 0 {
            println!(
                "{}",
                style("Running `webclip generate` will overwrite modified files.").yellow()
            );
        }

        Ok(())
    }
}

fn print_diff(status: &FileStatus, on_disk: &str) {
    println!();
    println!("  {CUSTOM}{}", style(status.path.display()).yellow().bold());
    println!(
        "  {} {}",
        style("--- built-in").red(),
        style("+++ on disk").green()
    );

    let diff = TextDiff::from_lines(status.expected.as_str(), on_disk);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", style(format!("-{change}")).red()),
            ChangeTag::Insert => print!("{}", style(format!("+{change}")).green()),
            ChangeTag::Equal => print!(" {change}"),
        }
        if change.missing_newline() {
            println!();
        }
    }
}
