//! Writer trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// A destination for finished log messages.
///
/// `write` receives the fully accumulated message text of one log statement
/// and the statement's level; the implementation looks up the level's prefix
/// and emits `prefix + message + '\n'`. Implementations must serialize
/// concurrent calls so the bytes of two messages never interleave, holding
/// their lock only for the duration of one message's format+write+flush.
pub trait LogWriter: Send + Sync {
    fn write(&self, message: &str, level: LogLevel) -> Result<()>;
    fn name(&self) -> &str;
}
