//! # Leveled Sink Logger
//!
//! A leveled logging facade that routes structured records to named sinks.
//!
//! ## Features
//!
//! - **Severity Filtering**: `debug < info < error`, plus `mute`
//! - **Aliases**: expose a binding under its own method name, e.g. `metric`
//! - **Fan-out**: every binding behind a method receives its own record
//! - **Deterministic Time**: inject a [`Clock`] for reproducible `eventTime`

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        make_logger, BindingConfig, Clock, FixedClock, LogContext, LogMethod, LogRecord, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Severity, Sink,
        SinkBinding, SystemClock, Threshold, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, ConsoleStream, JsonSink, MemorySink};
}

pub use core::{
    make_logger, BindingConfig, Clock, FixedClock, LogContext, LogMethod, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Severity, Sink, SinkBinding,
    SystemClock, Threshold, TimestampFormat,
};
pub use sinks::{ConsoleSink, ConsoleStream, JsonSink, MemorySink};
