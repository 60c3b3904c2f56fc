// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod logging;
pub mod timer;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game::{DEFAULT_LIVES, Game, GameError, MaskingPolicy, Status};
pub use timer::{prompt_with_timeout, wait_for_line};
pub use wordbank::{WordProvider, load_lines_from_file, load_lines_from_str, tokenize};
