//! Console implementation of [`PlayerIo`]

use super::{MessageStyle, PlayerIo, parse_guess};
use crate::error::{GameError, GuessError};
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompt shown before each guess is read
pub const PROMPT: &str = "guess a character: ";

/// Line-based player I/O over a reader and a writer
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl ConsoleIo<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{line}") {
            tracing::warn!(error = %e, "failed to write to player");
        }
    }
}

impl<R: BufRead, W: Write> PlayerIo for ConsoleIo<R, W> {
    fn prompt_char(&mut self) -> Result<char, GameError> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        let line = String::from_utf8(buf).map_err(|_| GuessError::NotUtf8)?;

        Ok(parse_guess(&line)?)
    }

    fn notify(&mut self, message: &str) {
        self.write_line(message);
    }

    fn notify_styled(&mut self, message: &str, style: MessageStyle) {
        if !self.color {
            self.write_line(message);
            return;
        }

        let styled = match style {
            MessageStyle::Info => message.normal(),
            MessageStyle::Pattern => message.bright_white().bold(),
            MessageStyle::Success => message.green().bold(),
            MessageStyle::Error => message.red().bold(),
        };
        self.write_line(&styled.to_string());
    }
}
