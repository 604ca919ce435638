use anyhow::Result;
use clap::Parser;

use botfriend::{ChatSession, ReadlineInput};

#[derive(Parser)]
#[command(name = "botfriend")]
#[command(version = "0.1.0")]
#[command(about = "Bot-friend is a terminal companion that chats about Your mood and running")]
struct BotfriendArgs {
	/// Disable colored output
	#[arg(long)]
	no_color: bool,
}

fn main() -> Result<()> {
	let args = BotfriendArgs::parse();

	if args.no_color {
		colored::control::set_override(false);
	}

	// One session per process run; the only fatal condition is an invalid
	// continuation answer, which propagates here and exits non-zero
	let input = ReadlineInput::new()?;
	let mut chat = ChatSession::new(input, std::io::stdout());
	chat.run()
}
