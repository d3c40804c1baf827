//! Sink trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A writable destination for log records
///
/// Takes `&self` so one sink can sit behind several bindings; implementors
/// own their interior locking. Each call receives a record of its own.
pub trait Sink: Send + Sync {
    fn write(&self, record: LogRecord) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
