//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! a call returning [`Result`](crate::Result), so sink failures stay visible.
//!
//! # Examples
//!
//! ```
//! use leveled_sink_logger::prelude::*;
//! use leveled_sink_logger::info;
//! use std::sync::Arc;
//!
//! let logger = make_logger(vec![SinkBinding::new("info", Arc::new(MemorySink::new()))], "info")?;
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a formatted message through a method name, including aliases.
///
/// # Examples
///
/// ```
/// # use leveled_sink_logger::prelude::*;
/// # use std::sync::Arc;
/// use leveled_sink_logger::log;
/// let sink = Arc::new(MemorySink::new());
/// let logger = make_logger(vec![SinkBinding::new("info", sink.clone()).alias("metric")], "info")?;
/// log!(logger, "metric", "cache hit ratio {:.2}", 0.93)?;
/// assert_eq!(sink.records()[0].message(), Some("cache hit ratio 0.93"));
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $method:expr, $($arg:tt)+) => {
        $logger.log($method, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug.as_str(), $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info.as_str(), $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use leveled_sink_logger::prelude::*;
/// # use std::sync::Arc;
/// use leveled_sink_logger::error;
/// # let logger = make_logger(vec![SinkBinding::new("error", Arc::new(MemorySink::new()))], "mute")?;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error.as_str(), $($arg)+)
    };
}
