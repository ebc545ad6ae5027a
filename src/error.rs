//! Error types for the game
//!
//! Three kinds of failure exist:
//! - [`ConfigError`]: the word list is unusable. Fatal at startup.
//! - [`GuessError`]: the player typed something that is not a single letter.
//!   Recoverable; the session re-prompts without penalty.
//! - [`GameError::InvalidState`]: an internal invariant broke. Fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Word list could not be turned into a usable source of secret words
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read word list '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list '{source_name}' contains no words")]
    Empty { source_name: String },
}

/// A malformed guess
///
/// The display text is shown to the player as-is before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a single letter")]
    Empty,

    #[error("Please enter a single letter, not {0} characters")]
    TooLong(usize),

    #[error("'{0}' is not a letter, please enter a single letter")]
    NotAlphabetic(char),

    #[error("Input was not valid text, please enter a single letter")]
    NotUtf8,
}

/// Top-level error for everything a game run can hit
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("invalid game state: {0}")]
    InvalidState(String),

    #[error("failed to read player input: {0}")]
    Input(#[from] io::Error),

    #[error("player input closed before the game finished")]
    InputClosed,
}

impl GameError {
    /// Whether the turn loop may swallow this error and re-prompt
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Guess(_))
    }
}
