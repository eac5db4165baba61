//! Game settings.
//!
//! Built from defaults, then the environment (`TRIVIA_QUESTIONS`,
//! `TRIVIA_DELAY_MS`, `TRIVIA_SEED`), then command-line flags in `main`.

use std::time::Duration;

use crate::consts::{ADVANCE_DELAY, EVENT_CAPACITY, QUESTIONS_PER_GAME};

pub const ENV_QUESTIONS: &str = "TRIVIA_QUESTIONS";
pub const ENV_DELAY_MS: &str = "TRIVIA_DELAY_MS";
pub const ENV_SEED: &str = "TRIVIA_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Questions drawn per game.
    pub questions_per_game: usize,
    /// Pause between answering and the next screen.
    pub advance_delay: Duration,
    pub event_capacity: usize,
    /// Fixed shuffle seed; random when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_per_game: QUESTIONS_PER_GAME,
            advance_delay: ADVANCE_DELAY,
            event_capacity: EVENT_CAPACITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` yields. Unparseable values
    /// are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            questions_per_game: parse_positive(&lookup, ENV_QUESTIONS)
                .unwrap_or(default.questions_per_game),
            advance_delay: parse(&lookup, ENV_DELAY_MS)
                .map(Duration::from_millis)
                .unwrap_or(default.advance_delay),
            seed: parse(&lookup, ENV_SEED).or(default.seed),
            ..default
        }
    }
}

fn parse<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    match parse(lookup, key)? {
        0 => {
            tracing::warn!(key, "ignoring zero, need at least one");
            None
        }
        n => Some(n),
    }
}
