//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordList;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Split newline-delimited text into words
///
/// Each line is trimmed; blank lines are dropped. No other validation is applied.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_text;
///
/// let words = words_from_text("  cat\n\ndog  \r\n");
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Load a word list from a file
///
/// The file is read fully as UTF-8, one word per line.
///
/// # Errors
///
/// Returns `ConfigError::Unreadable` if the file cannot be read, and
/// `ConfigError::Empty` if it holds no words after trimming.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    WordList::new(path.display().to_string(), words_from_text(&content))
}

/// Build a word list from an embedded string slice
///
/// # Errors
///
/// Returns `ConfigError::Empty` if the slice holds no words after trimming.
pub fn words_from_slice(source_name: &str, slice: &[&str]) -> Result<WordList, ConfigError> {
    let words = slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    WordList::new(source_name, words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hangman-{}-{name}", std::process::id()))
    }

    #[test]
    fn words_from_text_trims_and_skips_blank_lines() {
        let words = words_from_text("apple\n  banana \n\n\t\ncherry\r\n");
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn words_from_text_keeps_order() {
        let words = words_from_text("zebra\napple\nmango");
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let list = words_from_slice("test", &["crane", "  ", "slate "]).unwrap();
        assert_eq!(list.words(), &["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty_is_config_error() {
        let input: &[&str] = &[];
        assert!(matches!(
            words_from_slice("test", input),
            Err(ConfigError::Empty { .. })
        ));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_path("words.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "river\n\n  stone  \nwillow").unwrap();
        }

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.words(), &["river", "stone", "willow"]);
    }

    #[test]
    fn load_from_file_missing_is_unreadable() {
        let path = temp_path("does-not-exist.txt");
        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
        assert!(err.to_string().contains("does-not-exist.txt"));
    }

    #[test]
    fn load_from_file_blank_is_empty() {
        let path = temp_path("blank.txt");
        fs::write(&path, "\n   \n\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Empty { .. })));
    }
}
