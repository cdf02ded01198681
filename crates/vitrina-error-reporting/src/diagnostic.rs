//! Core diagnostic message types.
//!
//! Diagnostics are advisory by design: producers collect them and callers
//! decide how to surface them (log, print, count). Nothing in the render
//! path changes behavior based on a diagnostic.

use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A problem that prevented part of the input from being used
    Error,
    /// A problem that doesn't prevent rendering but indicates broken content
    Warning,
    /// Informational message
    Info,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Error => write!(f, "error"),
            DiagnosticKind::Warning => write!(f, "warning"),
            DiagnosticKind::Info => write!(f, "info"),
        }
    }
}

/// An advisory finding about the content graph or a page binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The kind of diagnostic (Error, Warning, Info)
    pub kind: DiagnosticKind,

    /// Human-readable description of the finding
    pub message: String,

    /// Where the finding points, when it can be located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            message: message.into(),
            location: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            message: message.into(),
            location: None,
        }
    }

    /// Attach a location to this diagnostic.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Convert to a JSON value for machine consumption.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{}: {} ({})", self.kind, self.message, loc),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}
