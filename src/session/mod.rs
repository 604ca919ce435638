// Session module: the per-run user record and the interactive chat logic

pub mod chat;

/// A user talking to the chatbot. Tracks the display name and how many
/// consecutive turns they have chosen to keep the conversation going.
#[derive(Debug, Clone)]
pub struct User {
	name: String,
	continue_count: u32,
}

impl User {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			continue_count: 0,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of continuing turns since the last reset
	pub fn continue_count(&self) -> u32 {
		self.continue_count
	}

	pub fn increase_continue_count(&mut self) {
		self.continue_count += 1;
	}

	// Only the count-5 break reminder resets the counter
	pub fn reset_continue_count(&mut self) {
		self.continue_count = 0;
	}
}

impl Default for User {
	fn default() -> Self {
		Self::new(chat::DEFAULT_NAME)
	}
}
