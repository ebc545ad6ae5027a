//! Revealed pattern: the player-visible projection of the secret word
//!
//! Each cell is either hidden (shown as [`PLACEHOLDER`]) or holds the true
//! letter once it has been guessed. The pattern always has exactly one cell
//! per letter of the secret word.

use super::SecretWord;
use std::fmt;

/// Filler shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// Letter-by-letter view of the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    cells: Vec<Option<char>>,
}

impl RevealedPattern {
    /// Create the starting pattern for `word`
    ///
    /// Alphabetic letters start hidden. Anything a player cannot type as a
    /// guess (hyphens, apostrophes, digits) is shown from the start.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{RevealedPattern, SecretWord};
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// let pattern = RevealedPattern::hidden(&word);
    /// assert_eq!(pattern.to_string(), "_ _ _");
    /// ```
    #[must_use]
    pub fn hidden(word: &SecretWord) -> Self {
        let cells = (0..word.len())
            .map(|i| word.letter_at(i).filter(|c| !c.is_alphabetic()))
            .collect();
        Self { cells }
    }

    /// Reveal every position where `letter` occurs in `word`
    ///
    /// Returns how many cells changed from hidden to revealed. Re-revealing a
    /// letter is a no-op and returns 0.
    pub fn reveal(&mut self, word: &SecretWord, letter: char) -> usize {
        let mut newly_revealed = 0;
        for &pos in word.positions_of(letter) {
            if let Some(cell) = self.cells.get_mut(pos) {
                if cell.is_none() {
                    *cell = word.letter_at(pos);
                    newly_revealed += 1;
                }
            }
        }
        newly_revealed
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True once no placeholders remain
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Cells with placeholders substituted, one char per letter
    #[must_use]
    pub fn display_chars(&self) -> Vec<char> {
        self.cells
            .iter()
            .map(|c| c.unwrap_or(PLACEHOLDER))
            .collect()
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ch) in self.display_chars().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> SecretWord {
        SecretWord::new(text).unwrap()
    }

    #[test]
    fn hidden_pattern_matches_word_length() {
        let w = word("elephant");
        let pattern = RevealedPattern::hidden(&w);
        assert_eq!(pattern.len(), 8);
        assert_eq!(pattern.hidden_count(), 8);
        assert!(!pattern.is_complete());
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let w = word("banana");
        let mut pattern = RevealedPattern::hidden(&w);

        assert_eq!(pattern.reveal(&w, 'a'), 3);
        assert_eq!(pattern.to_string(), "_ a _ a _ a");
    }

    #[test]
    fn reveal_is_idempotent() {
        let w = word("banana");
        let mut pattern = RevealedPattern::hidden(&w);
        pattern.reveal(&w, 'n');
        let before = pattern.clone();

        assert_eq!(pattern.reveal(&w, 'n'), 0);
        assert_eq!(pattern, before);
    }

    #[test]
    fn reveal_absent_letter_changes_nothing() {
        let w = word("cat");
        let mut pattern = RevealedPattern::hidden(&w);
        assert_eq!(pattern.reveal(&w, 'z'), 0);
        assert_eq!(pattern.hidden_count(), 3);
    }

    #[test]
    fn reveal_uses_original_letter_case() {
        let w = word("Oslo");
        let mut pattern = RevealedPattern::hidden(&w);
        pattern.reveal(&w, 'o');
        assert_eq!(pattern.to_string(), "O _ _ o");
    }

    #[test]
    fn complete_after_all_letters() {
        let w = word("cat");
        let mut pattern = RevealedPattern::hidden(&w);
        for c in ['c', 'a', 't'] {
            pattern.reveal(&w, c);
        }
        assert!(pattern.is_complete());
        assert_eq!(pattern.to_string(), "c a t");
    }

    #[test]
    fn non_letters_start_revealed() {
        let w = word("t-shirt");
        let pattern = RevealedPattern::hidden(&w);
        assert_eq!(pattern.to_string(), "_ - _ _ _ _ _");
        assert_eq!(pattern.hidden_count(), 6);
    }
}
