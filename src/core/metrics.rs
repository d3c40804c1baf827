//! Logger metrics for observability
//!
//! Per-logger counters for records written, calls filtered out by the
//! threshold, and sink writes that failed. Only the logger updates them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use leveled_sink_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = make_logger(
///     vec![
///         SinkBinding::new(Severity::Debug, sink.clone()),
///         SinkBinding::new(Severity::Info, sink),
///     ],
///     "info",
/// )?;
///
/// logger.info("kept")?;
/// logger.debug("filtered")?;
///
/// let metrics = logger.metrics();
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.calls_suppressed(), 1);
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records handed to a sink without error
    records_written: AtomicU64,

    /// Calls that produced no record because the threshold filtered them
    calls_suppressed: AtomicU64,

    /// Sink writes that returned an error
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub(crate) const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            calls_suppressed: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn calls_suppressed(&self) -> u64 {
        self.calls_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a successful sink write, returning the previous count
    #[inline]
    pub(crate) fn record_written(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a call filtered out by the threshold
    #[inline]
    pub(crate) fn record_suppressed(&self) -> u64 {
        self.calls_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed sink write
    #[inline]
    pub(crate) fn record_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0) of attempted writes
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.records_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_written: AtomicU64::new(self.records_written()),
            calls_suppressed: AtomicU64::new(self.calls_suppressed()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.calls_suppressed(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_metrics_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_written(), 0);
        assert_eq!(metrics.record_written(), 1);
        assert_eq!(metrics.records_written(), 2);
    }

    #[test]
    fn test_metrics_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..10 {
            metrics.record_failure();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();

        let snapshot = metrics.clone();
        metrics.record_written();

        assert_eq!(snapshot.records_written(), 1);
        assert_eq!(metrics.records_written(), 2);
    }
}
