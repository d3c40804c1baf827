//! Sink bindings: which sink receives which severity or alias

use super::sink::Sink;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// One destination for records of a given severity, optionally under an alias
///
/// The severity is kept as the name the caller gave; it is checked against
/// the known set when the logger is built, not here.
///
/// # Example
///
/// ```
/// use leveled_sink_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let binding = SinkBinding::new(Severity::Info, sink)
///     .alias("metric")
///     .with_field("isMetric", true);
///
/// assert_eq!(binding.method_name(), "metric");
/// ```
#[derive(Clone)]
pub struct SinkBinding {
    severity: String,
    alias: Option<String>,
    sink: Arc<dyn Sink>,
    additional: Map<String, Value>,
}

impl SinkBinding {
    pub fn new(severity: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        Self {
            severity: severity.into(),
            alias: None,
            sink,
            additional: Map::new(),
        }
    }

    /// Expose this binding under `alias` instead of its severity name
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Replace the fields merged into every record sent through this binding
    #[must_use]
    pub fn additional(mut self, additional: Map<String, Value>) -> Self {
        self.additional = additional;
        self
    }

    /// Add one field merged into every record sent through this binding
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.additional.insert(key.into(), value.into());
        self
    }

    pub fn severity_name(&self) -> &str {
        &self.severity
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Name the logger exposes this binding under: the alias, else the severity
    ///
    /// Severity names are exact, so this is also the route key once built.
    pub fn method_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.severity)
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn additional_fields(&self) -> &Map<String, Value> {
        &self.additional
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>, Arc<dyn Sink>, Map<String, Value>) {
        (self.severity, self.alias, self.sink, self.additional)
    }
}

impl fmt::Debug for SinkBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkBinding")
            .field("severity", &self.severity)
            .field("alias", &self.alias)
            .field("sink", &self.sink.name())
            .field("additional", &self.additional)
            .finish()
    }
}
