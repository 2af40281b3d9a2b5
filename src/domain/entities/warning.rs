use chrono::{DateTime, Local};

use super::check::CheckKind;
use crate::domain::value_objects::level::LogLevel;

/// A single human-readable warning, printed and appended to the log file.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub timestamp: DateTime<Local>,
    pub check: CheckKind,
    pub level: LogLevel,
    pub message: String,
}

impl Warning {
    /// Creates a `WARNING`-level entry stamped with the current local time.
    #[must_use]
    pub fn new(check: CheckKind, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            check,
            level: LogLevel::Warning,
            message,
        }
    }
}
