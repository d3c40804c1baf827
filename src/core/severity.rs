//! Severity and threshold definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known severities, ordered from most verbose to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Error = 2,
}

impl Severity {
    /// Every known severity in ascending order
    pub const ALL: [Severity; 3] = [Severity::Debug, Severity::Info, Severity::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names are matched exactly; `"INFO"` is not a severity
impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "error" => Ok(Severity::Error),
            _ => Err(LoggerError::invalid_severity(s)),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

/// Minimum severity a logger lets through, or `Mute` to drop everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Threshold {
    Mute,
    Level(Severity),
}

impl Threshold {
    pub const MUTE: &str = "mute";

    /// Whether a record of `severity` passes this threshold
    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        match self {
            Threshold::Mute => false,
            Threshold::Level(min) => severity >= *min,
        }
    }

    pub fn is_mute(&self) -> bool {
        matches!(self, Threshold::Mute)
    }

    /// Read a threshold from an environment variable
    ///
    /// An unset variable yields `default`; a set but unrecognized value is an error.
    pub fn from_env(var: &str, default: Threshold) -> Result<Self> {
        match std::env::var(var) {
            Ok(value) => value.parse(),
            Err(std::env::VarError::NotPresent) => Ok(default),
            Err(e) => Err(LoggerError::config(var, e.to_string())),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Level(Severity::Info)
    }
}

impl From<Severity> for Threshold {
    fn from(severity: Severity) -> Self {
        Threshold::Level(severity)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Mute => f.write_str(Self::MUTE),
            Threshold::Level(severity) => f.write_str(severity.as_str()),
        }
    }
}

impl FromStr for Threshold {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        if s == Self::MUTE {
            return Ok(Threshold::Mute);
        }
        s.parse().map(Threshold::Level)
    }
}

impl TryFrom<String> for Threshold {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        threshold.to_string()
    }
}
