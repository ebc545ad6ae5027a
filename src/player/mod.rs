//! Player input and output
//!
//! The [`PlayerIo`] trait is the only channel between a game session and the
//! player. [`ConsoleIo`] implements it over any reader/writer pair.

mod console;

pub use console::ConsoleIo;

use crate::core::fold_case;
use crate::error::{GameError, GuessError};

/// How a message should be presented
///
/// Purely cosmetic: implementations that can't style text ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Pattern,
    Success,
    Error,
}

/// Everything a game session needs from the player
pub trait PlayerIo {
    /// Read one guess
    ///
    /// # Errors
    ///
    /// Returns `GameError::Guess` for malformed input (recoverable), and
    /// `GameError::Input` / `GameError::InputClosed` when input can no longer
    /// be read.
    fn prompt_char(&mut self) -> Result<char, GameError>;

    /// Show a line of text to the player
    fn notify(&mut self, message: &str);

    /// Show a line of text with a presentation hint
    fn notify_styled(&mut self, message: &str, style: MessageStyle) {
        let _ = style;
        self.notify(message);
    }
}

/// Validate a raw line as a guess
///
/// Surrounding whitespace is trimmed; the rest must be exactly one alphabetic
/// character. Returns it lower-cased.
///
/// # Errors
///
/// Returns a `GuessError` describing why the line was rejected.
///
/// # Examples
/// ```
/// use hangman::player::parse_guess;
///
/// assert_eq!(parse_guess("  Q \n"), Ok('q'));
/// assert!(parse_guess("ab").is_err());
/// assert!(parse_guess("7").is_err());
/// ```
pub fn parse_guess(line: &str) -> Result<char, GuessError> {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();

    let first = chars.next().ok_or(GuessError::Empty)?;
    if chars.next().is_some() {
        return Err(GuessError::TooLong(trimmed.chars().count()));
    }
    if !first.is_alphabetic() {
        return Err(GuessError::NotAlphabetic(first));
    }

    Ok(fold_case(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess_accepts_single_letter() {
        assert_eq!(parse_guess("a"), Ok('a'));
        assert_eq!(parse_guess("z\n"), Ok('z'));
    }

    #[test]
    fn parse_guess_lowercases() {
        assert_eq!(parse_guess("K"), Ok('k'));
        assert_eq!(parse_guess("É"), Ok('é'));
    }

    #[test]
    fn parse_guess_trims_whitespace() {
        assert_eq!(parse_guess("   x\t\r\n"), Ok('x'));
    }

    #[test]
    fn parse_guess_rejects_empty() {
        assert_eq!(parse_guess(""), Err(GuessError::Empty));
        assert_eq!(parse_guess("   \n"), Err(GuessError::Empty));
    }

    #[test]
    fn parse_guess_rejects_several_characters() {
        assert_eq!(parse_guess("ab"), Err(GuessError::TooLong(2)));
        assert_eq!(parse_guess("a b"), Err(GuessError::TooLong(3)));
        assert_eq!(parse_guess("héllo"), Err(GuessError::TooLong(5)));
    }

    #[test]
    fn parse_guess_rejects_non_letters() {
        assert_eq!(parse_guess("7"), Err(GuessError::NotAlphabetic('7')));
        assert_eq!(parse_guess("_"), Err(GuessError::NotAlphabetic('_')));
        assert_eq!(parse_guess("?"), Err(GuessError::NotAlphabetic('?')));
    }
}
