//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered severity level.
///
/// The seven named levels use fixed numeric values (trace=100 up to dev=106)
/// so downstream log scrapers can rely on them. Any other `u8` is a valid
/// custom level: it participates in cutoff comparison ordinally and writers
/// render it with a synthesized `[CUSTOM:<n>]` prefix instead of a name.
///
/// `dev` deliberately sits above `error`. Development-only messages are never
/// cut off by the normal hierarchy unless their scope disables logging
/// outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(u8);

impl LogLevel {
    /// Detailed information for debugging.
    pub const TRACE: LogLevel = LogLevel(100);
    /// General debugging messages.
    pub const DEBUG: LogLevel = LogLevel(101);
    /// Evaluation messages that may be kept in release builds.
    pub const EVAL: LogLevel = LogLevel(102);
    pub const INFO: LogLevel = LogLevel(103);
    pub const WARN: LogLevel = LogLevel(104);
    pub const ERROR: LogLevel = LogLevel(105);
    /// Development convenience messages; should not survive into releases.
    pub const DEV: LogLevel = LogLevel(106);

    pub const fn from_raw(value: u8) -> Self {
        LogLevel(value)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The display name of a named level, `None` for custom values.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            LogLevel::TRACE => Some("TRACE"),
            LogLevel::DEBUG => Some("DEBUG"),
            LogLevel::EVAL => Some("EVAL"),
            LogLevel::INFO => Some("INFO"),
            LogLevel::WARN => Some("WARN"),
            LogLevel::ERROR => Some("ERROR"),
            LogLevel::DEV => Some("DEV"),
            _ => None,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match *self {
            LogLevel::TRACE => White,
            LogLevel::DEBUG => Blue,
            LogLevel::EVAL => Cyan,
            LogLevel::INFO => Green,
            LogLevel::WARN => Yellow,
            LogLevel::ERROR => Red,
            // dev and custom levels share the magenta rendering
            _ => Magenta,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::TRACE),
            "DEBUG" => Ok(LogLevel::DEBUG),
            "EVAL" => Ok(LogLevel::EVAL),
            "INFO" => Ok(LogLevel::INFO),
            "WARN" | "WARNING" => Ok(LogLevel::WARN),
            "ERROR" => Ok(LogLevel::ERROR),
            "DEV" => Ok(LogLevel::DEV),
            other => other
                .parse::<u8>()
                .map(LogLevel::from_raw)
                .map_err(|_| format!("Invalid log level: '{}'", s)),
        }
    }
}
