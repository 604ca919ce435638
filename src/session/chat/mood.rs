// Mood branch: classify how the user feels and respond with support

use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use super::classify::{is_negative, is_positive, wants_to_exit};
use super::input::InputSource;
use super::session::ChatSession;
use crate::session::User;

impl<I: InputSource, W: Write> ChatSession<I, W> {
	pub fn handle_mood(&mut self, user: &mut User) -> Result<()> {
		user.increase_continue_count();

		// Time the blocking read so the nudge can react to rushed answers
		writeln!(self.out, "\n* How are You feeling at the moment?")?;
		self.out.flush()?;
		let start = Instant::now();
		let input = self.input.read_line("< ")?;
		let response_secs = start.elapsed().as_secs() as i64;

		if wants_to_exit(&input) {
			return Ok(());
		}

		// Negative check runs first; an input hitting both lists is negative
		if is_negative(&input) {
			writeln!(
				self.out,
				"\n* I'm sorry to hear that, {}. Sometimes a little break, a walk or even just some deep breaths can help.",
				user.name()
			)?;
			self.encourage_relaxation(response_secs, user)?;

			// One nested yes/no sub-prompt, handled locally without looping
			let answer = self.ask(
				"\n* I want to tell You a bit more about relaxation strategies to help to get Your mind off. Do You want to hear it? (yes/no)",
			)?;
			if wants_to_exit(&answer) {
				writeln!(self.out, "\n* Understood, hope You will feel better soon. Bye!")?;
			} else if answer == "yes" {
				writeln!(
					self.out,
					"\n* Try listening to calming music, doodling in a notebook, or moving to Your favorite song. Even a short walk outside can help!"
				)?;
			} else if answer == "no" {
				writeln!(self.out, "\n* Understood, hope You will feel better soon. Take Your time!")?;
			} else {
				writeln!(self.out, "* I didn't understand that...")?;
			}
		} else if is_positive(&input) {
			writeln!(
				self.out,
				"\n* That's great to hear, {}! Keep enjoying the moment!",
				user.name()
			)?;
			self.encourage_relaxation(response_secs, user)?;
		} else {
			let elaboration = self.ask(&format!("\n* Could You tell me more, {}?", user.name()))?;
			if wants_to_exit(&elaboration) {
				return Ok(());
			}
			writeln!(
				self.out,
				"\n* I hear You, {}. Life makes us feel so many different emotions and it's all part of the journey.",
				user.name()
			)?;
			// Latency from the first answer still drives the nudge here
			self.encourage_relaxation(response_secs, user)?;
		}

		Ok(())
	}
}
