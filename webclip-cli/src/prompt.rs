//! Operator prompts
//!
//! Interactive terminals get dialoguer widgets. When stdin is piped, each
//! question is printed and answered by one line of input.

use dialoguer::{Confirm, Input};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use webclip::{Prompter, Result, WebclipError};

const ROOT_PROMPT: &str = "Enter the VAULT-ROOT-PATH where templates should be generated";

/// Asks the operator on the terminal, or reads answers from piped stdin
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    /// Create a prompter for the current stdin
    pub fn for_stdin() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn root_path(&mut self) -> Result<String> {
        if !self.interactive {
            return read_answer(&format!("{ROOT_PROMPT}: "));
        }

        Input::<String>::new()
            .with_prompt(ROOT_PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| WebclipError::Prompt(e.to_string()))
    }

    fn confirm_create(&mut self, path: &Path) -> Result<bool> {
        let question = format!("Directory '{}' does not exist. Create it?", path.display());
        if !self.interactive {
            let answer = read_answer(&format!("{question} (y/n): "))?;
            return Ok(is_consent(&answer));
        }

        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| WebclipError::Prompt(e.to_string()))
    }
}

/// Print `prompt` and read one line; end of input reads as an empty answer
fn read_answer(prompt: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")
        .and_then(|()| stdout.flush())
        .map_err(|e| WebclipError::Prompt(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| WebclipError::Prompt(e.to_string()))?;
    Ok(line)
}

fn is_consent(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
