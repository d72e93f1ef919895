//! Console writer implementation

use crate::core::{LogLevel, LogWriter, PrefixTable, Result};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes prefixed lines to the unbuffered standard error stream.
pub struct ConsoleWriter {
    prefixes: PrefixTable,
    /// Serializes whole lines so two messages never interleave.
    stream: Mutex<io::Stderr>,
}

impl ConsoleWriter {
    pub fn new(colorize: bool) -> Self {
        ConsoleWriter {
            prefixes: PrefixTable::new(colorize),
            stream: Mutex::new(io::stderr()),
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&self, message: &str, level: LogLevel) -> Result<()> {
        let prefix = self.prefixes.lookup(level);
        let mut stream = self.stream.lock();
        writeln!(stream, "{prefix}{message}")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
