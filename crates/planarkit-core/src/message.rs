//! Renderer messages forwarded to the modeler's message manager.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Informational message
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
    /// Fatal message
    Fatal,
}

impl MessageLevel {
    /// Numeric severity used by the modeler message manager
    /// (0 = informational, 1 = warning, 2 = error, 3 = fatal).
    pub fn severity(self) -> u32 {
        match self {
            Self::Info => 0,
            Self::Warning => 1,
            Self::Error => 2,
            Self::Fatal => 3,
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERR"),
            Self::Fatal => write!(f, "FATAL"),
        }
    }
}

/// A message destined for the modeler message manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message severity
    pub level: MessageLevel,
    /// Message text
    pub text: String,
}

impl Message {
    /// Create a new message
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Get formatted message
    pub fn formatted(&self) -> String {
        format!("[{}] {}", self.level, self.text)
    }
}
