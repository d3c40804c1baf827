//! Main logger implementation

use super::{
    binding::SinkBinding,
    clock::{Clock, SystemClock},
    error::{LoggerError, Result},
    log_context::LogContext,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    severity::{Severity, Threshold},
    sink::Sink,
    timestamp::TimestampFormat,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A binding after its severity name has been validated
struct ResolvedBinding {
    severity: Severity,
    sink: Arc<dyn Sink>,
    additional: Map<String, Value>,
}

struct LoggerInner {
    threshold: Threshold,
    /// Method name to its bindings, in the order they were supplied
    routes: HashMap<String, Vec<ResolvedBinding>>,
    /// Method names in first-seen order
    method_names: Vec<String>,
    clock: Arc<dyn Clock>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

/// Leveled logger dispatching records to the sinks bound to each method
///
/// Immutable once built; clones share the same routes and metrics.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

/// Build a logger from `bindings`, letting through severities at or above `threshold`
///
/// `threshold` is `"mute"` or a severity name. Fails with
/// [`LoggerError::InvalidSeverity`] on an unknown threshold or binding severity.
///
/// # Example
///
/// ```
/// use leveled_sink_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = make_logger(vec![SinkBinding::new("info", sink.clone())], "info")?;
///
/// logger.info("ready")?;
/// assert_eq!(sink.len(), 1);
///
/// assert!(make_logger(vec![SinkBinding::new("info", sink)], "blah").is_err());
/// # Ok::<(), LoggerError>(())
/// ```
pub fn make_logger(bindings: Vec<SinkBinding>, threshold: &str) -> Result<Logger> {
    Logger::builder()
        .bindings(bindings)
        .threshold(threshold)
        .build()
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn threshold(&self) -> Threshold {
        self.inner.threshold
    }

    /// Callable method names, in the order their first binding was supplied
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.inner.method_names.iter().map(String::as_str)
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.inner.routes.contains_key(method)
    }

    /// Whether a call to `method` would reach at least one sink
    pub fn is_enabled(&self, method: &str) -> bool {
        self.inner
            .routes
            .get(method)
            .is_some_and(|route| self.route_enabled(route))
    }

    /// Look up a log method by name
    pub fn method(&self, method: &str) -> Option<LogMethod<'_>> {
        self.inner
            .routes
            .get_key_value(method)
            .map(|(name, _)| LogMethod {
                logger: self,
                name: name.as_str(),
            })
    }

    pub fn log(&self, method: &str, message: impl AsRef<str>) -> Result<()> {
        self.dispatch(method, message.as_ref(), None)
    }

    /// Log with structured context fields
    pub fn log_with_context(
        &self,
        method: &str,
        message: impl AsRef<str>,
        context: &LogContext,
    ) -> Result<()> {
        self.dispatch(method, message.as_ref(), Some(context))
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Debug.as_str(), message)
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Info.as_str(), message)
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Error.as_str(), message)
    }

    pub fn debug_with_context(&self, message: impl AsRef<str>, context: &LogContext) -> Result<()> {
        self.log_with_context(Severity::Debug.as_str(), message, context)
    }

    pub fn info_with_context(&self, message: impl AsRef<str>, context: &LogContext) -> Result<()> {
        self.log_with_context(Severity::Info.as_str(), message, context)
    }

    pub fn error_with_context(&self, message: impl AsRef<str>, context: &LogContext) -> Result<()> {
        self.log_with_context(Severity::Error.as_str(), message, context)
    }

    /// Get the logger metrics
    ///
    /// Counters are read-only outside the logger:
    ///
    /// ```compile_fail
    /// use leveled_sink_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let logger = make_logger(vec![SinkBinding::new("info", Arc::new(MemorySink::new()))], "info")?;
    /// logger.metrics().record_written();
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    /// Flush every distinct sink once, in method then binding order
    pub fn flush(&self) -> Result<()> {
        let inner = &self.inner;
        let mut flushed: Vec<&Arc<dyn Sink>> = Vec::new();
        for binding in inner
            .method_names
            .iter()
            .filter_map(|name| inner.routes.get(name))
            .flatten()
        {
            if flushed.iter().any(|s| Arc::ptr_eq(s, &binding.sink)) {
                continue;
            }
            binding.sink.flush()?;
            flushed.push(&binding.sink);
        }
        Ok(())
    }

    fn route_enabled(&self, route: &[ResolvedBinding]) -> bool {
        route
            .iter()
            .any(|binding| self.inner.threshold.allows(binding.severity))
    }

    /// Build one record per enabled binding and write it to that binding's sink
    ///
    /// The clock is read once per call. The first sink error is returned
    /// as-is; sinks earlier in the route have already been written.
    fn dispatch(&self, method: &str, message: &str, context: Option<&LogContext>) -> Result<()> {
        let inner = &self.inner;
        let route = inner
            .routes
            .get(method)
            .ok_or_else(|| LoggerError::unknown_method(method))?;

        if !self.route_enabled(route) {
            inner.metrics.record_suppressed();
            return Ok(());
        }

        let event_time = inner.timestamp_format.format(&inner.clock.now())?;

        for binding in route
            .iter()
            .filter(|binding| inner.threshold.allows(binding.severity))
        {
            let record = LogRecord::build(
                binding.severity,
                message,
                &event_time,
                context,
                &binding.additional,
            );

            if let Err(e) = binding.sink.write(record) {
                inner.metrics.record_failure();
                return Err(e);
            }
            inner.metrics.record_written();
        }

        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.inner.threshold)
            .field("methods", &self.inner.method_names)
            .field("timestamp_format", &self.inner.timestamp_format)
            .finish()
    }
}

/// A log method bound to its name, as returned by [`Logger::method`]
#[derive(Clone, Copy)]
pub struct LogMethod<'a> {
    logger: &'a Logger,
    name: &'a str,
}

impl<'a> LogMethod<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.logger.is_enabled(self.name)
    }

    pub fn call(&self, message: impl AsRef<str>) -> Result<()> {
        self.logger.log(self.name, message)
    }

    pub fn call_with_context(&self, message: impl AsRef<str>, context: &LogContext) -> Result<()> {
        self.logger.log_with_context(self.name, message, context)
    }
}

impl fmt::Debug for LogMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogMethod").field("name", &self.name).finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Validation happens in [`LoggerBuilder::build`]; nothing is checked
/// while the builder is being filled in.
///
/// # Example
/// ```
/// use leveled_sink_logger::prelude::*;
/// use std::sync::Arc;
///
/// let metrics_sink = Arc::new(MemorySink::new());
/// let logger = Logger::builder()
///     .threshold(Severity::Info)
///     .binding(SinkBinding::new(Severity::Error, Arc::new(MemorySink::new())))
///     .binding(
///         SinkBinding::new(Severity::Info, metrics_sink.clone())
///             .alias("metric")
///             .with_field("isMetric", true),
///     )
///     .clock(FixedClock::parse("2025-01-08T10:30:45.123Z").unwrap())
///     .build()?;
///
/// logger.log("metric", "cache hit")?;
/// assert_eq!(metrics_sink.records()[0].event_time(), Some("2025-01-08T10:30:45.123Z"));
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    threshold: String,
    bindings: Vec<SinkBinding>,
    clock: Arc<dyn Clock>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: Threshold::default().to_string(),
            bindings: Vec::new(),
            clock: Arc::new(SystemClock),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the threshold: `"mute"` or a severity name
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: impl Into<String>) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Add a sink binding
    #[must_use = "builder methods return a new value"]
    pub fn binding(mut self, binding: SinkBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn bindings(mut self, bindings: impl IntoIterator<Item = SinkBinding>) -> Self {
        self.bindings.extend(bindings);
        self
    }

    /// Set the time source for `eventTime`
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Validate the configuration and build the Logger
    pub fn build(self) -> Result<Logger> {
        let threshold: Threshold = self.threshold.parse()?;
        self.timestamp_format.validate()?;

        if self.bindings.is_empty() {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "at least one sink binding is required",
            ));
        }

        let mut routes: HashMap<String, Vec<ResolvedBinding>> = HashMap::new();
        let mut method_names = Vec::new();

        for binding in self.bindings {
            let (severity, alias, sink, additional) = binding.into_parts();
            let severity: Severity = severity.parse()?;

            if alias.as_deref().is_some_and(|a| a.trim().is_empty()) {
                return Err(LoggerError::config(
                    "SinkBinding",
                    format!("empty alias on '{}' binding to sink '{}'", severity, sink.name()),
                ));
            }

            let method = alias.unwrap_or_else(|| severity.as_str().to_string());
            if !routes.contains_key(&method) {
                method_names.push(method.clone());
            }
            routes.entry(method).or_default().push(ResolvedBinding {
                severity,
                sink,
                additional,
            });
        }

        Ok(Logger {
            inner: Arc::new(LoggerInner {
                threshold,
                routes,
                method_names,
                clock: self.clock,
                timestamp_format: self.timestamp_format,
                metrics: LoggerMetrics::new(),
            }),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
