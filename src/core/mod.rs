//! Core logger types and traits

pub mod binding;
pub mod clock;
pub mod config;
pub mod error;
pub mod log_context;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use binding::SinkBinding;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BindingConfig, LoggerConfig};
pub use error::{LoggerError, Result};
pub use log_context::LogContext;
pub use log_record::LogRecord;
pub use logger::{make_logger, LogMethod, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::{Severity, Threshold};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
