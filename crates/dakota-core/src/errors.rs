//! Structured error types shared across the Dakota crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Context key holding the exit status of a failed external process.
pub const EXIT_CODE_KEY: &str = "exit_code";
/// Context key holding the signal that terminated an external process.
pub const SIGNAL_KEY: &str = "signal";
/// Context key holding the combined stdout/stderr of a failed process.
pub const OUTPUT_KEY: &str = "output";

/// Structured payload attached to every [`DakotaError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, field names, exit codes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for experiment generation and launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum DakotaError {
    /// The requested analysis method is not registered.
    #[error("method error: {0}")]
    Method(ErrorInfo),
    /// A descriptor field is unrecognized, ill-typed or inconsistent.
    #[error("field error: {0}")]
    Field(ErrorInfo),
    /// A configuration document could not be parsed or emitted.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Filesystem or process spawn failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// The external binary exited abnormally.
    #[error("process error: {0}")]
    Process(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl DakotaError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            DakotaError::Method(info)
            | DakotaError::Field(info)
            | DakotaError::Config(info)
            | DakotaError::Io(info)
            | DakotaError::Process(info) => info,
        }
    }

    /// Exit code of a failed external process, when it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DakotaError::Process(info) => info
                .context
                .get(EXIT_CODE_KEY)
                .and_then(|code| code.parse().ok()),
            _ => None,
        }
    }

    /// Combined stdout/stderr captured from a failed external process.
    pub fn output(&self) -> Option<&str> {
        match self {
            DakotaError::Process(info) => info.context.get(OUTPUT_KEY).map(String::as_str),
            _ => None,
        }
    }
}
