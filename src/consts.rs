//! Project-wide constants.

use std::path::PathBuf;
use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How many questions a game draws from the bank.
pub const QUESTIONS_PER_GAME: usize = 10;

/// Pause between answering and showing the next screen.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// Minimum score for the middle result tier. Fixed regardless of game size.
pub const GREAT_SCORE: usize = 7;

/// Event bus capacity.
pub const EVENT_CAPACITY: usize = 32;

pub const PERFECT_MESSAGE: &str = "You're a true train expert!";
pub const GREAT_MESSAGE: &str = "Great job! You know a lot about freight trains.";
pub const RETRY_MESSAGE: &str = "Looks like you could use a few more trips on the rails. Try again!";

/// Default question bank path: `~/.trivia/questions.json`.
/// `None` when the home directory cannot be determined.
pub fn default_bank_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".trivia").join("questions.json"))
}
