//! JSON lines sink for structured logging

use crate::core::{LogRecord, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes each record as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonSink<W: Write + Send> {
    writer: Mutex<W>,
    pretty: bool,
}

impl JsonSink<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    /// Pretty-print records; output is then no longer one record per line
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn write(&self, record: LogRecord) -> Result<()> {
        let json = if self.pretty {
            record.to_json_pretty()?
        } else {
            record.to_json()?
        };

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, Severity};
    use serde_json::{json, Map, Value};
    use std::fs;
    use tempfile::tempdir;

    const TS: &str = "2025-01-08T10:30:45.123Z";

    #[test]
    fn test_json_sink_file() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let sink = JsonSink::file(&log_path)?;
        let context = LogContext::new()
            .with_field("user_id", 123)
            .with_field("action", "login");

        sink.write(LogRecord::build(
            Severity::Info,
            "User logged in",
            TS,
            Some(&context),
            &Map::new(),
        ))?;
        sink.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let parsed: Value = serde_json::from_str(content.trim_end())?;
        assert_eq!(parsed["message"], json!("User logged in"));
        assert_eq!(parsed["user_id"], json!(123));
        assert_eq!(parsed["eventTime"], json!(TS));

        Ok(())
    }

    #[test]
    fn test_json_sink_one_line_per_record() -> Result<()> {
        let sink = JsonSink::new(Vec::<u8>::new());

        for i in 0..5 {
            let context = LogContext::new().with_field("iteration", i);
            sink.write(LogRecord::build(
                Severity::Debug,
                &format!("Iteration {}", i),
                TS,
                Some(&context),
                &Map::new(),
            ))?;
        }

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);

        for line in lines {
            let parsed: Value = serde_json::from_str(line)?;
            assert_eq!(parsed["severity"], json!("debug"));
            assert!(parsed["message"].is_string());
        }

        Ok(())
    }

    #[test]
    fn test_json_sink_pretty() -> Result<()> {
        let sink = JsonSink::new(Vec::<u8>::new()).pretty();
        sink.write(LogRecord::build(Severity::Error, "boom", TS, None, &Map::new()))?;

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.lines().count() > 1);
        let parsed: Value = serde_json::from_str(&output)?;
        assert_eq!(parsed["severity"], json!("error"));

        Ok(())
    }
}
