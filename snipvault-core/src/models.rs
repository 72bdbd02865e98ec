//! Core data models for SnipVault.

use serde::{Deserialize, Serialize};

/// A single titled snippet of code or command text.
///
/// The title is the snippet's identity and never changes; `language` is a
/// free-form tag naming the syntax grammar for highlighting (unrecognized
/// tags degrade to plain text at the rendering boundary), and `code` is the
/// literal, newline-preserving payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub language: String,
    pub code: String,
}

impl Snippet {
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            code: code.into(),
        }
    }
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A transient, severity-tagged user-facing message (copy feedback etc.).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}
