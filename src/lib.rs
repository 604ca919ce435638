// Main lib.rs file that exports our modules
pub mod session;

// Re-export commonly used items for convenience
pub use session::chat::{ChatSession, InputSource, ReadlineInput};
pub use session::User;
