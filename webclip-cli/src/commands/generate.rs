//! Template generation command

use anyhow::Result;
use console::style;
use webclip::emitter::{EmitOptions, WriteEvent};
use webclip::generator::{GenerateRequest, Generator, RunEvent};
use webclip::{TemplateRegistry, WebclipConfig};

use crate::prompt::TerminalPrompter;

/// Generate every template into a vault
pub struct GenerateCommand {
    root: Option<String>,
    assume_yes: bool,
    aggregate: bool,
}

impl GenerateCommand {
    /// Create a command from CLI flags layered over `config`
    pub const fn new(
        root: Option<String>,
        yes: bool,
        no_aggregate: bool,
        config: &WebclipConfig,
    ) -> Self {
        Self {
            root,
            assume_yes: yes || config.prompt.assume_yes,
            aggregate: config.output.aggregate && !no_aggregate,
        }
    }

    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let generator = Generator::new(TemplateRegistry::builtin()?);
        let request = GenerateRequest {
            root: self.root,
            assume_yes: self.assume_yes,
            emit: EmitOptions {
                aggregate: self.aggregate,
            },
        };

        let report = generator.run(&mut TerminalPrompter::for_stdin(), request, print_event)?;
        tracing::debug!(?report, "generation finished");

        println!();
        let done = if self.aggregate {
            "All templates generated and cloned successfully."
        } else {
            "All templates generated successfully."
        };
        println!("{}", style(done).green().bold());

        Ok(())
    }
}

/// Print one confirmation line per completed step
fn print_event(event: &RunEvent<'_>) {
    match event {
        RunEvent::RootCreated(path) => {
            println!("{} {}", style("Created directory:").green(), path.display());
        }
        RunEvent::Write(WriteEvent::Created { template, path }) => {
            println!(
                "{} {} at: {}",
                style("Created template").green(),
                style(format!("'{template}'")).cyan(),
                path.display()
            );
        }
        RunEvent::Write(WriteEvent::Cloned { template, path }) => {
            println!(
                "{} {} into repository at: {}",
                style("Cloned template").green(),
                style(format!("'{template}'")).cyan(),
                style(path.display()).dim()
            );
        }
        RunEvent::GuidanceWritten(path) => {
            println!();
            println!(
                "{} {}",
                style("Created import guidance documentation at:").green(),
                path.display()
            );
        }
    }
}
