//! Core domain types for hangman
//!
//! Pure types with no I/O: the secret word and the pattern the player sees.

mod pattern;
mod word;

pub use pattern::{PLACEHOLDER, RevealedPattern};
pub use word::{SecretWord, fold_case};
