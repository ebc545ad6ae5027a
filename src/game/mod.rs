//! Game session and configuration

mod config;
mod session;

pub use config::{ATTEMPTS_ENV, DEFAULT_ATTEMPTS, GameConfig, attempts_from_value};
pub use session::{GameSession, GameState, GameSummary, GuessOutcome};
