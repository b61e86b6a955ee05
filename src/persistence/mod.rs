//! Saving and resuming a game.

mod error;
mod save_file;

pub use error::SaveError;
pub use save_file::{DEFAULT_SAVE_FILE, SaveFile, SavePolicy};
