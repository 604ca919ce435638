// Running branch: flat dispatch over a few fixed sub-topics

use std::io::Write;

use anyhow::Result;

use super::classify::wants_to_exit;
use super::input::InputSource;
use super::session::ChatSession;
use crate::session::User;

impl<I: InputSource, W: Write> ChatSession<I, W> {
	pub fn handle_running(&mut self, user: &mut User) -> Result<()> {
		user.increase_continue_count();

		let input = self.ask(
			"\n* Okay, let's talk about running! What aspect interests You the most? (shoes/pace/mindset/workouts/endurance)",
		)?;

		if wants_to_exit(&input) {
			return Ok(());
		}

		// Exact matches only; "shoes " with a trailing space is invalid
		match input.as_str() {
			"shoes" => writeln!(
				self.out,
				"\n* The best running shoes depend on Your foot type and running style. There is a possibility to do a foot test to get to know which shoes fit You the best. Brands like Nike, Adidas and Asics have great options!"
			)?,
			"pace" => writeln!(
				self.out,
				"\n* Improving speed requires interval training, proper form and consistency. Sprint drills help a lot!"
			)?,
			"mindset" => writeln!(
				self.out,
				"\n* A strong mindset is key! Setting goals, staying disciplined and embracing challenges make You a better runner."
			)?,
			"workouts" => writeln!(
				self.out,
				"\n* Strength training is essential for runners! Squats, lunges, deadlifts and core exercises like planks help improve power, endurance and injury prevention."
			)?,
			"endurance" => writeln!(
				self.out,
				"\n* To build endurance, gradually increase Your running distance while maintaining a steady pace. Incorporate interval training and strength exercises to improve stamina and efficiency."
			)?,
			_ => writeln!(
				self.out,
				"* That's not a valid option. Please choose one from (shoes/pace/mindset/workouts/endurance)!"
			)?,
		}

		// Latency pinned to 0 so only the count thresholds can fire
		self.encourage_relaxation(0, user)
	}
}
