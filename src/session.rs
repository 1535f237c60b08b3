//! Read-execute-print loop around a [`CommandInterpreter`].
//!
//! The loop talks to the outside world through two ports: a [`LineSource`]
//! producing input lines and a [`LineSink`] consuming output lines. Closures,
//! `Vec<String>`, and the stdio adapters in this module implement them.

use crate::command::CommandName;
use crate::interpreter::CommandInterpreter;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Input line that ends the session. Never reaches the interpreter.
pub const EXIT_KEYWORD: &str = "EXIT";

/// Written before each line is read.
pub const PROMPT: &str = "\nEnter command: ";

/// Produces input lines. `None` means end of input.
pub trait LineSource {
    fn next_line(&mut self) -> Option<String>;
}

/// Consumes output lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str);
}

impl<F: FnMut() -> Option<String>> LineSource for F {
    fn next_line(&mut self) -> Option<String> {
        self()
    }
}

impl<F: FnMut(&str)> LineSink for F {
    fn write_line(&mut self, line: &str) {
        self(line)
    }
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Reads lines from any buffered reader, such as locked stdin.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!("failed to read input: {e}");
                None
            }
        }
    }
}

/// Writes lines to any writer, flushing after each one.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush()) {
            warn!("failed to write output: {e}");
        }
    }
}

/// Counts of commands handled during one [`Session::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines the interpreter accepted.
    pub executed: usize,
    /// Lines the interpreter rejected with an error.
    pub rejected: usize,
}

/// The help banner printed when a session starts.
pub fn help_text() -> Vec<String> {
    let mut lines = vec!["Toy Robot Movement".to_string(), "Commands:".to_string()];
    for name in CommandName::ALL {
        lines.push(match name {
            CommandName::Place => format!("- {name} X,Y,DIRECTION (e.g., PLACE 0,0,NORTH)"),
            _ => format!("- {name}"),
        });
    }
    lines.push(format!("- {EXIT_KEYWORD}"));
    lines
}

/// One interactive session driving a single robot.
pub struct Session {
    interpreter: CommandInterpreter,
}

impl Session {
    pub fn new(interpreter: CommandInterpreter) -> Self {
        Self { interpreter }
    }

    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// Runs until `EXIT` or end of input.
    ///
    /// Each line is trimmed before use. Results are written only when non-empty;
    /// errors are written as their message and the loop carries on.
    pub fn run(
        &mut self,
        input: &mut impl LineSource,
        output: &mut impl LineSink,
    ) -> SessionStats {
        for line in help_text() {
            output.write_line(&line);
        }
        info!(grid_size = self.interpreter.robot().grid_size(), "session started");

        let mut stats = SessionStats::default();
        loop {
            output.write_line(PROMPT);
            let Some(raw) = input.next_line() else {
                break;
            };
            let line = raw.trim();
            if line.eq_ignore_ascii_case(EXIT_KEYWORD) {
                break;
            }

            match self.interpreter.execute(line) {
                Ok(result) => {
                    stats.executed += 1;
                    if !result.is_empty() {
                        output.write_line(&result);
                    }
                }
                Err(e) => {
                    stats.rejected += 1;
                    output.write_line(&e.to_string());
                }
            }
        }

        info!(executed = stats.executed, rejected = stats.rejected, "session ended");
        stats
    }
}
