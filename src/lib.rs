//! Hangman
//!
//! A terminal word-guessing game: a word is picked at random from a list and
//! the player guesses one letter at a time until the word is revealed or the
//! wrong guesses run out.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::SecretWord;
//! use hangman::game::{GameConfig, GameSession, GameState};
//!
//! let word = SecretWord::new("cat").unwrap();
//! let mut session = GameSession::new(word, &GameConfig::default()).unwrap();
//!
//! for letter in ['c', 'a', 't'] {
//!     session.apply_guess(letter).unwrap();
//! }
//! assert_eq!(session.state(), GameState::Won);
//! assert_eq!(session.guess_count(), 3);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Session state machine and configuration
pub mod game;

// Diagnostics setup
pub mod logging;

// Player input/output
pub mod player;

// Word lists
pub mod wordlists;
