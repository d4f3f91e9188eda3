//! Reading answers from the user.
//!
//! The menu never touches stdin directly; it goes through [`Prompt`] so the
//! selection loop can be driven by canned input in tests.

use crate::error::Result;
use console::Term;
use dialoguer::Input;
use std::io::{self, BufRead, BufReader, IsTerminal, Stdin, Stdout, Write};

/// Source of interactive answers.
pub trait Prompt {
    /// Shows `prompt` and reads one line. `None` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Shows `message` and blocks until the user acknowledges it.
    fn pause(&mut self, message: &str) -> Result<()>;
}

/// Line-oriented prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        // EOF counts as an acknowledgement.
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(())
    }
}

/// Prompt for the real terminal.
///
/// Uses `dialoguer` line editing and a single key press for the pause when
/// attached to a terminal, and plain stdin lines when input is piped.
pub struct ConsolePrompt {
    term: Term,
    piped: LinePrompt<BufReader<Stdin>, Stdout>,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            piped: LinePrompt::new(BufReader::new(io::stdin()), io::stdout()),
        }
    }

    fn interactive(&self) -> bool {
        io::stdin().is_terminal() && self.term.is_term()
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.interactive() {
            return self.piped.read_line(prompt);
        }

        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(Some(answer))
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        if !self.interactive() {
            return self.piped.pause(message);
        }

        self.term.write_str(message)?;
        self.term.read_key()?;
        self.term.write_line("")?;
        Ok(())
    }
}
