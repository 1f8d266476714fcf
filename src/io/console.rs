//! Terminal input and output.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::{InputProvider, OutputSink};
use crate::core::{parse_option, GameError, MenuOption};

/// Reads decisions line by line, writing prompts to `writer`.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console input over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one line of free text, without its newline.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GameError::input_closed(prompt));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn request_choice<T: MenuOption>(&mut self, prompt: &str, options: &[T]) -> Result<T, GameError> {
        for option in options {
            writeln!(self.writer, "{}: {}", option.key(), option.label())?;
        }
        loop {
            let line = self.read_line(&format!("{prompt} "))?;
            if let Some(choice) = parse_option(options, &line) {
                return Ok(choice);
            }
            debug!(input = %line, "Rejected menu input");
            let keys: Vec<String> = options.iter().map(|o| o.key().to_string()).collect();
            writeln!(self.writer, "Invalid input, please enter one of: {}", keys.join(", "))?;
        }
    }

    fn request_any_key(&mut self, prompt: &str) -> Result<(), GameError> {
        self.read_line(&format!("{prompt} ")).map(|_| ())
    }

    fn request_text(&mut self, prompt: &str) -> Result<String, GameError> {
        self.read_line(&format!("{prompt} "))
    }
}

/// Writes each emitted message on its own line.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{text}").and_then(|()| self.writer.flush()) {
            warn!(%err, "Failed to write game output");
        }
    }
}
