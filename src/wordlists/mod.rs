//! Word lists for hangman
//!
//! A [`WordList`] is the source of secret words: loaded once at startup,
//! validated non-empty, immutable afterwards. Selection takes the random
//! source as a parameter so it can be seeded.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use crate::error::{ConfigError, GameError};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Name used for the compiled-in list in messages and logs
pub const BUILTIN: &str = "builtin";

/// Non-empty, ordered list of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    source_name: String,
    words: Vec<String>,
}

impl WordList {
    /// Wrap already-trimmed words
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Empty` if `words` is empty. An empty list is a
    /// configuration problem, caught here rather than at selection time.
    pub fn new(source_name: impl Into<String>, words: Vec<String>) -> Result<Self, ConfigError> {
        let source_name = source_name.into();
        if words.is_empty() {
            return Err(ConfigError::Empty { source_name });
        }

        tracing::debug!(source = %source_name, count = words.len(), "word list loaded");
        Ok(Self { source_name, words })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded list is empty, which the build script rejects.
    pub fn builtin() -> Result<Self, ConfigError> {
        loader::words_from_slice(BUILTIN, WORDS)
    }

    /// Where the words came from (file path or [`BUILTIN`])
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a secret word uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` if the picked entry is blank.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SecretWord, GameError> {
        let word = pick_random(&self.words, rng)?;
        SecretWord::new(word)
    }
}

/// Select one word uniformly at random
///
/// # Errors
///
/// Returns `GameError::InvalidState` if `words` is empty. Lists are validated
/// when loaded, so hitting this is a programming error.
///
/// # Examples
/// ```
/// use hangman::wordlists::pick_random;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = vec!["cat".to_string(), "dog".to_string()];
/// let mut rng = StdRng::seed_from_u64(7);
/// let word = pick_random(&words, &mut rng).unwrap();
/// assert!(words.iter().any(|w| w == word));
/// ```
pub fn pick_random<'a, R: Rng + ?Sized>(
    words: &'a [String],
    rng: &mut R,
) -> Result<&'a str, GameError> {
    words
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| GameError::InvalidState("cannot pick from an empty word list".to_string()))
}
