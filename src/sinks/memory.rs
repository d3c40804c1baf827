//! In-memory sink, mostly for tests

use crate::core::{LogRecord, Result, Sink};
use parking_lot::Mutex;

/// Collects records in insertion order
#[derive(Debug)]
pub struct MemorySink {
    name: String,
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the records written so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Drain the records written so far
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&self, record: LogRecord) -> Result<()> {
        self.records.lock().push(record);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
