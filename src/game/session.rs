//! Game session state machine and turn loop

use super::GameConfig;
use crate::core::{RevealedPattern, SecretWord};
use crate::error::GameError;
use crate::player::{MessageStyle, PlayerIo};
use crate::wordlists::WordList;
use rand::Rng;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Effect of a single accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; `revealed` cells were newly uncovered
    Hit { revealed: usize },
    /// Letter is in the word but was already revealed
    Repeat,
    /// Letter is not in the word; one attempt consumed
    Miss { attempts_remaining: u32 },
}

/// Final result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub state: GameState,
    pub word: String,
    pub guesses: u32,
    pub attempts_remaining: u32,
}

/// One game of hangman
///
/// Owns the secret word, the revealed pattern and the counters. State only
/// changes through [`GameSession::apply_guess`].
#[derive(Debug, Clone)]
pub struct GameSession {
    word: SecretWord,
    pattern: RevealedPattern,
    attempts_remaining: u32,
    guess_count: u32,
    state: GameState,
}

impl GameSession {
    /// Start a session for a known word
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` if `config` allows zero attempts.
    pub fn new(word: SecretWord, config: &GameConfig) -> Result<Self, GameError> {
        if config.attempts == 0 {
            return Err(GameError::InvalidState(
                "a game needs at least one attempt".to_string(),
            ));
        }

        let pattern = RevealedPattern::hidden(&word);
        let mut session = Self {
            word,
            pattern,
            attempts_remaining: config.attempts,
            guess_count: 0,
            state: GameState::InProgress,
        };
        // Words made only of non-letters have nothing left to guess
        session.update_state();
        Ok(session)
    }

    /// Start a session with a word picked at random from `words`
    ///
    /// # Errors
    ///
    /// Propagates selection errors from [`WordList::pick`].
    pub fn from_word_list<R: Rng + ?Sized>(
        words: &WordList,
        rng: &mut R,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        let word = words.pick(rng)?;
        tracing::info!(
            source = words.source_name(),
            letters = word.len(),
            attempts = config.attempts,
            "new game"
        );
        Self::new(word, config)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[must_use]
    pub const fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Number of well-formed guesses processed so far
    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Apply one validated guess
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` if the session has already finished or
    /// the pattern no longer lines up with the secret word.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if self.state.is_finished() {
            return Err(GameError::InvalidState(format!(
                "guess '{letter}' after the game ended ({:?})",
                self.state
            )));
        }
        self.check_invariants()?;

        self.guess_count += 1;

        let outcome = if self.word.has_letter(letter) {
            match self.pattern.reveal(&self.word, letter) {
                0 => GuessOutcome::Repeat,
                revealed => GuessOutcome::Hit { revealed },
            }
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessOutcome::Miss {
                attempts_remaining: self.attempts_remaining,
            }
        };

        self.update_state();
        tracing::debug!(
            %letter,
            ?outcome,
            guesses = self.guess_count,
            hidden = self.pattern.hidden_count(),
            state = ?self.state,
            "guess applied"
        );
        Ok(outcome)
    }

    /// Run the turn loop until the game is won or lost
    ///
    /// Malformed guesses are reported to the player and re-prompted without
    /// consuming an attempt. Every other error ends the loop.
    ///
    /// # Errors
    ///
    /// Returns any non-recoverable error from `io` or from the state machine.
    pub fn play<P: PlayerIo + ?Sized>(&mut self, io: &mut P) -> Result<GameSummary, GameError> {
        io.notify("Start guessing...");

        while !self.state.is_finished() {
            io.notify_styled(&self.pattern.to_string(), MessageStyle::Pattern);

            let letter = match io.prompt_char() {
                Ok(letter) => letter,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(error = %e, "rejected guess");
                    io.notify_styled(&e.to_string(), MessageStyle::Error);
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let GuessOutcome::Miss { attempts_remaining } = self.apply_guess(letter)? {
                io.notify(&format!(
                    "You have {attempts_remaining} more {}",
                    plural_guess(attempts_remaining)
                ));
            }
        }

        match self.state {
            GameState::Won => {
                io.notify(&format!("The word was: {}", self.word));
                io.notify_styled("You won!", MessageStyle::Success);
            }
            GameState::Lost => {
                io.notify_styled(
                    &format!("You lost! The word was: {}", self.word),
                    MessageStyle::Error,
                );
            }
            GameState::InProgress => {
                return Err(GameError::InvalidState(
                    "turn loop ended with the game still in progress".to_string(),
                ));
            }
        }
        io.notify(&format!(
            "Game took {} {}",
            self.guess_count,
            plural_guess(self.guess_count)
        ));

        let summary = self.summary();
        tracing::info!(state = ?summary.state, guesses = summary.guesses, "game finished");
        Ok(summary)
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            state: self.state,
            word: self.word.text().to_string(),
            guesses: self.guess_count,
            attempts_remaining: self.attempts_remaining,
        }
    }

    fn update_state(&mut self) {
        self.state = if self.pattern.is_complete() {
            GameState::Won
        } else if self.attempts_remaining == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        };
    }

    fn check_invariants(&self) -> Result<(), GameError> {
        if self.pattern.len() != self.word.len() {
            return Err(GameError::InvalidState(format!(
                "pattern has {} cells but the word has {} letters",
                self.pattern.len(),
                self.word.len()
            )));
        }
        Ok(())
    }
}

const fn plural_guess(n: u32) -> &'static str {
    if n == 1 { "guess" } else { "guesses" }
}
