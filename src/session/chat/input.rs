// User input handling module

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config as RustylineConfig, Editor};

/// Source of user input lines. The chat session reads through this trait so
/// the dialogue logic can be driven from scripted lines in tests.
pub trait InputSource {
	fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Line input backed by rustyline
pub struct ReadlineInput {
	editor: Editor<(), DefaultHistory>,
}

impl ReadlineInput {
	pub fn new() -> Result<Self> {
		// Configure rustyline
		let config = RustylineConfig::builder()
			.auto_add_history(true) // Automatically add lines to history
			.bell_style(rustyline::config::BellStyle::None) // No bell
			.build();

		Ok(Self {
			editor: Editor::with_config(config)?,
		})
	}
}

impl InputSource for ReadlineInput {
	fn read_line(&mut self, prompt: &str) -> Result<String> {
		match self.editor.readline(&prompt.bright_blue().to_string()) {
			Ok(line) => Ok(line),
			// Ctrl+C and a closed input stream both count as an empty line,
			// so the dialogue falls through its empty-input paths
			Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(String::new()),
			Err(err) => Err(err.into()),
		}
	}
}

/// Scripted input for driving dialogue tests; a drained script reads as
/// empty lines, same as a closed stream
#[cfg(test)]
pub(crate) struct ScriptedInput {
	lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
	pub(crate) fn new(lines: &[&str]) -> Self {
		Self {
			lines: lines.iter().map(|line| line.to_string()).collect(),
		}
	}
}

#[cfg(test)]
impl InputSource for ScriptedInput {
	fn read_line(&mut self, _prompt: &str) -> Result<String> {
		Ok(self.lines.pop_front().unwrap_or_default())
	}
}
