//! Severity prefix rendering
//!
//! Each writer owns one prefix table, built once at construction. Named
//! levels map to fixed bracketed tags padded to a common column so messages
//! line up; unknown levels get a synthesized `[CUSTOM:<n>] ` prefix.

use super::log_level::LogLevel;
use colored::Colorize;
use std::borrow::Cow;
use std::collections::HashMap;

/// Width of the bracketed tag column, including trailing padding.
const PREFIX_WIDTH: usize = 8;

const NAMED_LEVELS: [LogLevel; 7] = [
    LogLevel::TRACE,
    LogLevel::DEBUG,
    LogLevel::EVAL,
    LogLevel::INFO,
    LogLevel::WARN,
    LogLevel::ERROR,
    LogLevel::DEV,
];

#[derive(Debug)]
pub struct PrefixTable {
    prefixes: HashMap<LogLevel, String>,
    colorize: bool,
}

impl PrefixTable {
    pub fn new(colorize: bool) -> Self {
        if colorize {
            // An explicit color request wins over tty detection.
            colored::control::set_override(true);
        }

        let prefixes = NAMED_LEVELS
            .iter()
            .map(|&level| (level, Self::named_prefix(level, colorize)))
            .collect();

        PrefixTable { prefixes, colorize }
    }

    /// The prefix for `level`: the fixed tag for named levels, a
    /// synthesized `[CUSTOM:<n>] ` otherwise.
    pub fn lookup(&self, level: LogLevel) -> Cow<'_, str> {
        match self.prefixes.get(&level) {
            Some(prefix) => Cow::Borrowed(prefix.as_str()),
            None => Cow::Owned(self.custom_prefix(level)),
        }
    }

    fn named_prefix(level: LogLevel, colorize: bool) -> String {
        let name = match level.name() {
            Some(name) => name,
            // NAMED_LEVELS only holds named levels
            None => return String::new(),
        };
        let tag = format!("[{name}]");
        let pad = " ".repeat(PREFIX_WIDTH - tag.len());
        if colorize {
            format!("{}{}", tag.color(level.color_code()).bold(), pad)
        } else {
            format!("{tag}{pad}")
        }
    }

    fn custom_prefix(&self, level: LogLevel) -> String {
        let tag = format!("[CUSTOM:{}]", level.raw());
        if self.colorize {
            format!("{} ", tag.color(colored::Color::Magenta).bold())
        } else {
            format!("{tag} ")
        }
    }
}
