//! Fallback writer that performs no I/O
//!
//! Installed when the writer configuration is invalid, so that logging
//! degrades to silence instead of crashing the host process.

use crate::core::{LogLevel, LogWriter, Result};

pub struct NullWriter;

impl NullWriter {
    pub fn new() -> Self {
        NullWriter
    }
}

impl Default for NullWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for NullWriter {
    fn write(&self, _message: &str, _level: LogLevel) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
