//! Timestamp formatting for the `eventTime` field
//!
//! All built-in formats produce ISO 8601 compatible strings.

use super::error::{LoggerError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options for `eventTime`
///
/// # Examples
///
/// ```
/// use leveled_sink_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now())?;
/// assert!(timestamp.ends_with('Z'));
/// # Ok::<(), leveled_sink_logger::LoggerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 with explicit offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// The caller is responsible for keeping it ISO 8601 shaped.
    /// Specifiers chrono cannot render are rejected by [`TimestampFormat::validate`].
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// Only a `Custom` format can fail, when it holds an unrenderable specifier.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        match self {
            TimestampFormat::Iso8601 => Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true)),
            TimestampFormat::Iso8601Micros => {
                Ok(datetime.to_rfc3339_opts(SecondsFormat::Micros, true))
            }
            TimestampFormat::Rfc3339 => {
                Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, false))
            }
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                write!(rendered, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::config(
                        "TimestampFormat",
                        format!("cannot render custom format '{}'", format_str),
                    )
                })?;
                Ok(rendered)
            }
        }
    }

    /// Check that this format renders, so logging never trips over it later
    pub fn validate(&self) -> Result<()> {
        self.format(&DateTime::<Utc>::UNIX_EPOCH).map(|_| ())
    }
}
