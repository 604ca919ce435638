// Chat session implementation

use std::io::Write;

use anyhow::{bail, Result};
use colored::Colorize;

use super::classify::{extract_name, wants_to_exit};
use super::input::InputSource;
use crate::session::User;

const FRAME: &str = "======================================================";

/// Interactive chat session over one input source and one output sink.
/// Stdout and rustyline in production, buffers in tests.
pub struct ChatSession<I: InputSource, W: Write> {
	pub(crate) input: I,
	pub(crate) out: W,
}

impl<I: InputSource, W: Write> ChatSession<I, W> {
	pub fn new(input: I, out: W) -> Self {
		Self { input, out }
	}

	// Print a question, then read the user's answer behind the prompt marker
	pub(crate) fn ask(&mut self, question: &str) -> Result<String> {
		writeln!(self.out, "{}", question)?;
		self.out.flush()?;
		self.input.read_line("< ")
	}

	fn print_welcome(&mut self) -> Result<()> {
		writeln!(self.out, "{}", FRAME.bright_cyan())?;
		writeln!(self.out, "* Welcome to Bot-friend!                              *")?;
		writeln!(self.out, "* This chatbot can talk with You about Your mood,     *")?;
		writeln!(self.out, "* give relaxation tips and discuss running topics.    *")?;
		writeln!(self.out, "* Just type Your responses in lower case!             *")?;
		writeln!(self.out, "* Type 'bye' or 'adios' anytime to exit the chat.     *")?;
		writeln!(self.out, "{}\n", FRAME.bright_cyan())?;
		Ok(())
	}

	fn print_help(&mut self) -> Result<()> {
		writeln!(self.out, "{}", FRAME.bright_cyan())?;
		writeln!(self.out, "* This chatbot can talk about:                       *")?;
		writeln!(self.out, "* Your mood and running.                             *")?;
		writeln!(self.out, "* Type 'bye' or 'adios' anytime to exit the chat.    *")?;
		writeln!(self.out, "{}\n", FRAME.bright_cyan())?;
		Ok(())
	}

	/// Run the session until the user exits, or until the continuation
	/// prompt gets an answer it cannot take (the one fatal condition)
	pub fn run(&mut self) -> Result<()> {
		self.print_welcome()?;

		let answer = self.ask("* Hi! I'm Bot-friend. Tell me Your name.")?;
		let mut user = User::new(extract_name(&answer));

		writeln!(
			self.out,
			"\n* Okay, {}, nice to meet You, let's chat. Also know that if You don't want to talk anymore, You can just type 'adios' or 'bye' to exit.",
			user.name()
		)?;

		loop {
			let topic = self.ask(&format!(
				"\n* What do You want to chat about, {}? (mood/running/help)",
				user.name()
			))?;

			match topic.as_str() {
				input if wants_to_exit(input) => break,
				"help" => self.print_help()?,
				"mood" => self.handle_mood(&mut user)?,
				"running" => self.handle_running(&mut user)?,
				_ => writeln!(self.out, "* I didn't understand that...")?,
			}

			let answer = self.ask("\n* Would You like to continue our conversation? (yes/no)")?;
			if answer == "yes" {
				user.increase_continue_count();
				self.encourage_relaxation(0, &mut user)?;
			} else if answer == "no" || wants_to_exit(&answer) {
				writeln!(self.out, "\n* Alright, {}, ciao!", user.name())?;
				break;
			} else {
				// everything else in the dialogue degrades to a fallback
				// message; only this aborts the session
				bail!("Invalid response! But I got You - the answer was not yes...");
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::super::input::ScriptedInput;
	use super::*;

	fn run_chat(lines: &[&str]) -> (Result<()>, String) {
		let mut chat = ChatSession::new(ScriptedInput::new(lines), Vec::new());
		let result = chat.run();
		(result, String::from_utf8(chat.out).unwrap())
	}

	#[test]
	fn test_greeting_addresses_extracted_name() {
		let (result, output) = run_chat(&["my name is Sam", "bye"]);
		assert!(result.is_ok());
		assert!(output.contains("Okay, Sam, nice to meet You"));
	}

	#[test]
	fn test_mood_flow_with_strategies() {
		let (result, output) = run_chat(&["Sam", "mood", "I am so tired and stressed", "yes", "no"]);
		assert!(result.is_ok());
		assert!(output.contains("I'm sorry to hear that, Sam"));
		assert!(output.contains("calming music"));
		assert!(output.contains("Alright, Sam, ciao!"));
	}

	#[test]
	fn test_running_flow_reaches_continuation_prompt() {
		let (result, output) = run_chat(&["Sam", "running", "pace", "no"]);
		assert!(result.is_ok());
		assert!(output.contains("Improving speed"));
		assert!(output.contains("Would You like to continue our conversation? (yes/no)"));
	}

	#[test]
	fn test_invalid_continuation_answer_is_fatal() {
		let (result, _) = run_chat(&["Sam", "help", "maybe"]);
		let err = result.unwrap_err();
		assert!(err.to_string().contains("Invalid response!"));
	}

	#[test]
	fn test_mood_exit_returns_to_main_loop_silently() {
		let (result, output) = run_chat(&["Sam", "mood", "bye", "no"]);
		assert!(result.is_ok());
		assert!(!output.contains("sorry to hear"));
		assert!(!output.contains("great to hear"));
		assert!(!output.contains("I hear You"));
		// the outer loop keeps going after the silent return
		assert!(output.contains("Would You like to continue our conversation?"));
	}

	#[test]
	fn test_topic_exit_breaks_without_farewell() {
		let (result, output) = run_chat(&["Sam", "adios"]);
		assert!(result.is_ok());
		assert!(!output.contains("ciao"));
	}

	#[test]
	fn test_unknown_topic_falls_back_locally() {
		let (result, output) = run_chat(&["Sam", "weather", "no"]);
		assert!(result.is_ok());
		assert!(output.contains("I didn't understand that..."));
		assert!(output.contains("Alright, Sam, ciao!"));
	}

	#[test]
	fn test_help_prints_topic_summary() {
		let (result, output) = run_chat(&["Sam", "help", "no"]);
		assert!(result.is_ok());
		assert!(output.contains("This chatbot can talk about:"));
	}

	#[test]
	fn test_break_reminder_after_three_continuing_turns() {
		// each "yes" increments the counter and nudges with latency 0,
		// so the third one lands on the short-break reminder
		let (result, output) = run_chat(&[
			"Sam", "weather", "yes", "weather", "yes", "weather", "yes", "weather", "no",
		]);
		assert!(result.is_ok());
		assert!(output.contains("short break"));
	}

	#[test]
	fn test_drained_input_reads_as_empty_lines() {
		// no input at all: the name falls back to the placeholder and the
		// empty continuation answer hits the fatal path
		let (result, output) = run_chat(&[]);
		assert!(output.contains("Okay, Friend, nice to meet You"));
		assert!(result.is_err());
	}
}
