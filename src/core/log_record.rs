//! Flat structured record written to sinks

use super::log_context::LogContext;
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SEVERITY_FIELD: &str = "severity";
pub const MESSAGE_FIELD: &str = "message";
pub const EVENT_TIME_FIELD: &str = "eventTime";

/// One log record as a flat JSON object
///
/// Built by layering, later layers winning on key collisions:
/// context fields, then `severity`/`message`/`eventTime`, then the
/// binding's additional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord {
    fields: Map<String, Value>,
}

impl LogRecord {
    pub fn build(
        severity: Severity,
        message: &str,
        event_time: &str,
        context: Option<&LogContext>,
        additional: &Map<String, Value>,
    ) -> Self {
        let mut fields = context.map(|c| c.fields().clone()).unwrap_or_default();

        fields.insert(
            SEVERITY_FIELD.to_string(),
            Value::String(severity.as_str().to_string()),
        );
        fields.insert(MESSAGE_FIELD.to_string(), Value::String(message.to_string()));
        fields.insert(
            EVENT_TIME_FIELD.to_string(),
            Value::String(event_time.to_string()),
        );

        for (key, value) in additional {
            fields.insert(key.clone(), value.clone());
        }

        Self { fields }
    }

    pub fn severity(&self) -> Option<&str> {
        self.get_str(SEVERITY_FIELD)
    }

    pub fn message(&self) -> Option<&str> {
        self.get_str(MESSAGE_FIELD)
    }

    pub fn event_time(&self) -> Option<&str> {
        self.get_str(EVENT_TIME_FIELD)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty JSON string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
