//! Non-fatal findings reported during normalization.

use std::fmt;

use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A message produced by a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the visitor that produced this diagnostic.
    pub visitor: String,
    pub message: String,
    /// Declaration path, e.g. `UserController::update`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(visitor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            visitor: visitor.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn info(visitor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            visitor: visitor.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {location})")?;
        }
        Ok(())
    }
}
