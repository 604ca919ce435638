// Chat session module
mod classify;
mod input;
mod mood;
mod relaxation;
mod running;
mod session;

// Re-export main structures and functions
pub use classify::{extract_name, is_negative, is_positive, wants_to_exit, DEFAULT_NAME, EXIT_KEYWORDS};
pub use input::{InputSource, ReadlineInput};
pub use session::ChatSession;
