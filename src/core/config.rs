//! Serde-backed configuration for config-driven logger setups
//!
//! Sinks are runtime objects and cannot be deserialized, so a config names
//! them and the caller supplies the actual sinks by name.

use super::{
    binding::SinkBinding,
    error::{LoggerError, Result},
    logger::{Logger, LoggerBuilder},
    sink::Sink,
    timestamp::TimestampFormat,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

fn default_level() -> String {
    "info".to_string()
}

/// Binding description minus the sink object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingConfig {
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Name of the sink to look up when building
    pub sink: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub additional: Map<String, Value>,
}

/// Logger description: threshold, bindings, and timestamp format
///
/// # Example
///
/// ```
/// use leveled_sink_logger::prelude::*;
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let config: LoggerConfig = serde_json::from_str(r#"{
///     "level": "debug",
///     "bindings": [
///         { "severity": "debug", "sink": "memory" },
///         { "severity": "info", "alias": "metric", "sink": "memory",
///           "additional": { "isMetric": true } }
///     ]
/// }"#).unwrap();
///
/// let mut sinks: HashMap<String, Arc<dyn Sink>> = HashMap::new();
/// sinks.insert("memory".to_string(), Arc::new(MemorySink::new()));
///
/// let logger = config.build(&sinks)?;
/// assert!(logger.has_method("metric"));
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// `"mute"` or a severity name
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            bindings: Vec::new(),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse a config from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve sink names and return a builder ready for further tweaks
    pub fn into_builder(self, sinks: &HashMap<String, Arc<dyn Sink>>) -> Result<LoggerBuilder> {
        let mut builder = Logger::builder()
            .threshold(self.level)
            .timestamp_format(self.timestamp_format);

        for binding in self.bindings {
            let sink = sinks.get(&binding.sink).ok_or_else(|| {
                LoggerError::config(
                    "LoggerConfig",
                    format!("no sink registered under '{}'", binding.sink),
                )
            })?;

            let mut resolved =
                SinkBinding::new(binding.severity, Arc::clone(sink)).additional(binding.additional);
            if let Some(alias) = binding.alias {
                resolved = resolved.alias(alias);
            }
            builder = builder.binding(resolved);
        }

        Ok(builder)
    }

    pub fn build(self, sinks: &HashMap<String, Arc<dyn Sink>>) -> Result<Logger> {
        self.into_builder(sinks)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, Severity, Threshold};
    use crate::sinks::MemorySink;
    use serde_json::json;

    fn registry(sink: Arc<MemorySink>) -> HashMap<String, Arc<dyn Sink>> {
        let mut sinks: HashMap<String, Arc<dyn Sink>> = HashMap::new();
        sinks.insert("memory".to_string(), sink);
        sinks
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_build_from_json() {
        let sink = Arc::new(MemorySink::new());
        let config = LoggerConfig::from_json(
            r#"{
                "level": "info",
                "bindings": [
                    { "severity": "info", "alias": "metric", "sink": "memory",
                      "additional": { "isMetric": true } }
                ]
            }"#,
        )
        .unwrap();

        let logger = config
            .into_builder(&registry(sink.clone()))
            .unwrap()
            .clock(FixedClock::parse("2025-01-08T10:30:45.123Z").unwrap())
            .build()
            .unwrap();

        assert_eq!(logger.threshold(), Threshold::Level(Severity::Info));
        logger.log("metric", "hit").unwrap();
        assert_eq!(
            sink.records()[0].to_value(),
            json!({
                "severity": "info",
                "message": "hit",
                "eventTime": "2025-01-08T10:30:45.123Z",
                "isMetric": true
            })
        );
    }

    #[test]
    fn test_unknown_sink_name() {
        let config = LoggerConfig {
            bindings: vec![BindingConfig {
                severity: "error".to_string(),
                alias: None,
                sink: "syslog".to_string(),
                additional: Map::new(),
            }],
            ..LoggerConfig::default()
        };

        let err = config.build(&registry(Arc::new(MemorySink::new()))).unwrap_err();
        assert!(err.to_string().contains("syslog"));
    }

    #[test]
    fn test_invalid_level_rejected_at_build() {
        let config = LoggerConfig {
            level: "blah".to_string(),
            bindings: vec![BindingConfig {
                severity: "info".to_string(),
                alias: None,
                sink: "memory".to_string(),
                additional: Map::new(),
            }],
            ..LoggerConfig::default()
        };

        let err = config.build(&registry(Arc::new(MemorySink::new()))).unwrap_err();
        assert_eq!(err.to_string(), "An invalid log level was given: blah");
    }

    #[test]
    fn test_unrenderable_timestamp_format_rejected_at_build() {
        let config = LoggerConfig::from_json(
            r#"{
                "level": "info",
                "timestamp_format": { "Custom": "%Q" },
                "bindings": [{ "severity": "info", "sink": "memory" }]
            }"#,
        )
        .unwrap();

        let sink = Arc::new(MemorySink::new());
        let err = config.build(&registry(sink.clone())).unwrap_err();

        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(sink.is_empty());
    }
}
