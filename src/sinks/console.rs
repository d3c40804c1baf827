//! Console sink implementation

use crate::core::{LogRecord, Result, Severity, Sink};
use std::io::Write;

/// Which standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
    /// `error` records to stderr, everything else to stdout
    BySeverity,
}

/// Writes records as JSON lines to stdout and/or stderr
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    fn target_for(&self, record: &LogRecord) -> ConsoleStream {
        match self.stream {
            ConsoleStream::BySeverity
                if record.severity() == Some(Severity::Error.as_str()) =>
            {
                ConsoleStream::Stderr
            }
            ConsoleStream::BySeverity => ConsoleStream::Stdout,
            fixed => fixed,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(ConsoleStream::BySeverity)
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: LogRecord) -> Result<()> {
        let json = record.to_json()?;

        match self.target_for(&record) {
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", json)?,
            _ => writeln!(std::io::stdout().lock(), "{}", json)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
