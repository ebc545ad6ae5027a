//! Game configuration
//!
//! Built once at process start and passed into the session.

use std::env;

/// Attempts allowed when nothing else is configured
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Environment variable holding the number of attempts allowed
pub const ATTEMPTS_ENV: &str = "ATTEMPTS_LEFT";

/// Settings for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game is lost (always > 0)
    pub attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Config with an explicit attempt count
    ///
    /// A zero count falls back to [`DEFAULT_ATTEMPTS`].
    #[must_use]
    pub const fn with_attempts(attempts: u32) -> Self {
        Self {
            attempts: if attempts == 0 {
                DEFAULT_ATTEMPTS
            } else {
                attempts
            },
        }
    }

    /// Read the attempt count from [`ATTEMPTS_ENV`]
    #[must_use]
    pub fn from_env() -> Self {
        let raw = env::var(ATTEMPTS_ENV).ok();
        let attempts = attempts_from_value(raw.as_deref());
        tracing::debug!(?raw, attempts, "attempts configured from environment");
        Self { attempts }
    }
}

/// Parse a configured attempt count
///
/// Missing, non-integer, negative or zero values all give [`DEFAULT_ATTEMPTS`].
///
/// # Examples
/// ```
/// use hangman::game::{DEFAULT_ATTEMPTS, attempts_from_value};
///
/// assert_eq!(attempts_from_value(Some(" 6 ")), 6);
/// assert_eq!(attempts_from_value(Some("six")), DEFAULT_ATTEMPTS);
/// assert_eq!(attempts_from_value(None), DEFAULT_ATTEMPTS);
/// ```
#[must_use]
pub fn attempts_from_value(raw: Option<&str>) -> u32 {
    match raw.map(|s| s.trim().parse::<u32>()) {
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            tracing::warn!(
                value = raw.unwrap_or_default(),
                default = DEFAULT_ATTEMPTS,
                "invalid {ATTEMPTS_ENV}, using default"
            );
            DEFAULT_ATTEMPTS
        }
        None => DEFAULT_ATTEMPTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_attempts() {
        assert_eq!(GameConfig::default().attempts, 10);
    }

    #[test]
    fn with_attempts_keeps_positive_counts() {
        assert_eq!(GameConfig::with_attempts(3).attempts, 3);
        assert_eq!(GameConfig::with_attempts(0).attempts, DEFAULT_ATTEMPTS);
    }

    #[test]
    fn attempts_from_value_parses_integers() {
        assert_eq!(attempts_from_value(Some("1")), 1);
        assert_eq!(attempts_from_value(Some("25")), 25);
        assert_eq!(attempts_from_value(Some("  7\n")), 7);
    }

    #[test]
    fn attempts_from_value_falls_back_on_garbage() {
        assert_eq!(attempts_from_value(None), DEFAULT_ATTEMPTS);
        assert_eq!(attempts_from_value(Some("")), DEFAULT_ATTEMPTS);
        assert_eq!(attempts_from_value(Some("ten")), DEFAULT_ATTEMPTS);
        assert_eq!(attempts_from_value(Some("4.5")), DEFAULT_ATTEMPTS);
        assert_eq!(attempts_from_value(Some("-3")), DEFAULT_ATTEMPTS);
        assert_eq!(attempts_from_value(Some("0")), DEFAULT_ATTEMPTS);
    }
}
