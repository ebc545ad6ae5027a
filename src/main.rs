//! Hangman - CLI
//!
//! Picks a random word and runs a console game against it.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    game::{GameConfig, GameSession},
    logging,
    player::ConsoleIo,
    wordlists::{BUILTIN, WordList, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    /// Wrong guesses allowed (overrides the ATTEMPTS_LEFT environment variable)
    #[arg(short, long)]
    attempts: Option<u32>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, default_value = BUILTIN)]
    wordlist: String,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    let words = if wordlist == BUILTIN {
        WordList::builtin()?
    } else {
        load_from_file(wordlist)?
    };
    Ok(words)
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli
        .attempts
        .map_or_else(GameConfig::from_env, GameConfig::with_attempts);

    let words = load_wordlist(&cli.wordlist).context("failed to load word list")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = GameSession::from_word_list(&words, &mut rng, &config)?;
    let mut io = ConsoleIo::stdio(!cli.no_color);
    session.play(&mut io).context("game aborted")?;

    Ok(())
}
