//! Secret word representation
//!
//! A `SecretWord` stores the word chosen for a session along with letter position
//! indices so a guess can be revealed in one lookup.

use crate::error::GameError;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word the player is trying to uncover
///
/// Matching is case-insensitive: positions are indexed by the lower-cased letter,
/// while [`SecretWord::letter_at`] keeps the letter as it appeared in the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Lower-case a single character, keeping it as-is when lower-casing would
/// expand it into several characters.
#[must_use]
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

impl SecretWord {
    /// Create a new secret word
    ///
    /// Surrounding whitespace is trimmed. No other validation is applied.
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` if the trimmed word is empty; word
    /// sources never hand out empty entries.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Cat").unwrap();
    /// assert_eq!(word.len(), 3);
    /// assert!(word.has_letter('c'));
    /// assert!(SecretWord::new("  ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text: String = text.into().trim().to_string();
        if text.is_empty() {
            return Err(GameError::InvalidState(
                "secret word must not be empty".to_string(),
            ));
        }

        let letters: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            char_positions.entry(fold_case(ch)).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letter at `position`, as written in the word list
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Check if the word contains a letter, ignoring case
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&fold_case(letter))
    }

    /// Get all positions where a letter appears, ignoring case
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&fold_case(letter))
            .map_or(&[], Vec::as_slice)
    }

    /// Distinct lower-cased letters that a player has to guess
    #[must_use]
    pub fn guessable_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .char_positions
            .keys()
            .copied()
            .filter(|c| c.is_alphabetic())
            .collect();
        letters.sort_unstable();
        letters
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_trims() {
        let word = SecretWord::new("  cat\n").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_empty_is_invalid_state() {
        assert!(matches!(
            SecretWord::new(""),
            Err(GameError::InvalidState(_))
        ));
        assert!(SecretWord::new(" \t ").is_err());
    }

    #[test]
    fn word_keeps_original_case_for_display() {
        let word = SecretWord::new("Paris").unwrap();
        assert_eq!(word.letter_at(0), Some('P'));
        assert_eq!(word.to_string(), "Paris");
    }

    #[test]
    fn word_has_letter_ignores_case() {
        let word = SecretWord::new("Paris").unwrap();
        assert!(word.has_letter('p'));
        assert!(word.has_letter('P'));
        assert!(word.has_letter('S'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.positions_of('a'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.positions_of('z'), &[]);
    }

    #[test]
    fn word_counts_chars_not_bytes() {
        let word = SecretWord::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.positions_of('É'), &[3]);
    }

    #[test]
    fn guessable_letters_are_distinct_and_alphabetic() {
        let word = SecretWord::new("Pop-up").unwrap();
        assert_eq!(word.guessable_letters(), vec!['o', 'p', 'u']);
    }

    #[test]
    fn fold_case_keeps_expanding_characters() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('z'), 'z');
        // 'İ' lower-cases to two characters
        assert_eq!(fold_case('İ'), 'İ');
    }
}
