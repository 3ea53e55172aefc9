//! Activity log events
//!
//! Log records captured while the dashboard is on screen.

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(log_level: LogLevel, msg: String) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }

    pub fn is_error(&self) -> bool {
        self.log_level >= LogLevel::Warn
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} [{}] {}", self.log_level, self.timestamp, self.msg)
    }
}
