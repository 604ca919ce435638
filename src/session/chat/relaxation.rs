// Relaxation nudges: fast-answer remark plus escalating break reminders

use std::io::Write;

use anyhow::Result;

use super::input::InputSource;
use super::session::ChatSession;
use crate::session::User;

// Answers at or under this many seconds get the fast-answer remark
const FAST_ANSWER_SECS: i64 = 5;

impl<I: InputSource, W: Write> ChatSession<I, W> {
	/// Remind the user to take breaks as the conversation gets longer.
	/// Reads the continuation count but never increments it; incrementing
	/// happens at the call sites, once per continuing turn.
	pub fn encourage_relaxation(&mut self, response_secs: i64, user: &mut User) -> Result<()> {
		if response_secs > 0 && response_secs <= FAST_ANSWER_SECS {
			writeln!(
				self.out,
				"\n* And also, You answered so fast. I hope You gave Your answer some thought."
			)?;
		}

		match user.continue_count() {
			3 => writeln!(
				self.out,
				"\n* We talked quite some time. Maybe it's a good time for a short break? A peek outside the window or some deep breaths could be refreshing!"
			)?,
			4 => writeln!(
				self.out,
				"\n* We are talking for a long time now... Maybe it's a good time for a longer break? A gaze through the window or some breathing practices could be refreshing!"
			)?,
			5 => {
				writeln!(
					self.out,
					"\n* Hey, {}, we've been chatting for a while now. Maybe it's a good time to take a break from computer? Stretch a little, grab a drink or just breathe deeply for a moment. You'll feel refreshed!",
					user.name()
				)?;
				user.reset_continue_count();
			}
			_ => {}
		}

		Ok(())
	}
}
