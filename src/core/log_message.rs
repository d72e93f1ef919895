//! Per-statement message accumulation
//!
//! A [`LogMessage`] is created for one log statement, collects streamed
//! values into a text buffer, and emits the finished text to the
//! process-wide writer when it is dropped. Whether the statement emits at
//! all is decided by the [`ACTIVE`](LogMessage::ACTIVE) predicate over the
//! type's const parameters: a suppressed statement never allocates, never
//! formats, and every one of its method bodies constant-folds to nothing.
//!
//! The type is move-only. Rust's move semantics carry the single emission
//! responsibility with the value, so however many times a message is
//! relocated before it goes out of scope it is written at most once.

use super::config::{GLOBAL_CUTOFF_RAW, GLOBAL_ENABLED};
use super::log_level::LogLevel;
use super::sink;
use std::fmt::{self, Write as _};

/// A single log statement in flight.
///
/// `LEVEL` is the statement's severity, `CUTOFF` the scope's cutoff level
/// (defaulting to the build-time global cutoff) and `ENABLED` the scope's
/// enable flag. All three are fixed per call site, so the emit/suppress
/// decision is made per monomorphization rather than at run time.
///
/// # Examples
///
/// ```
/// use static_logger_system::{LogLevel, LogMessage};
///
/// // Streams "worker 3 started" to the process-wide writer when dropped.
/// LogMessage::<{ LogLevel::INFO.raw() }>::new()
///     .append("worker ")
///     .append(3)
///     .append(" started");
///
/// // Statically below the default cutoff: a complete no-op.
/// LogMessage::<{ LogLevel::TRACE.raw() }>::new().append("not rendered");
/// ```
pub struct LogMessage<
    const LEVEL: u8,
    const CUTOFF: u8 = { GLOBAL_CUTOFF_RAW },
    const ENABLED: bool = true,
> {
    /// `Some` with the accumulated text in the active configuration,
    /// `None` in the inert one. The inert case never allocates.
    buffer: Option<String>,
}

impl<const LEVEL: u8, const CUTOFF: u8, const ENABLED: bool>
    LogMessage<LEVEL, CUTOFF, ENABLED>
{
    /// Whether this statement's configuration emits at all.
    ///
    /// Evaluated once per monomorphization; the branches on it in `new`,
    /// `push` and `drop` are compile-time constants, which is what lets an
    /// optimized build elide the buffering code of suppressed statements
    /// entirely.
    pub const ACTIVE: bool = GLOBAL_ENABLED && ENABLED && LEVEL >= CUTOFF;

    /// An empty message with no source prefix.
    pub fn new() -> Self {
        LogMessage {
            buffer: if Self::ACTIVE {
                Some(String::new())
            } else {
                None
            },
        }
    }

    /// An empty message prefixed with `[Name] `, where `Name` is the last
    /// path segment of `source` (typically a `core::any::type_name` result).
    ///
    /// The prefix is rendered here, on construction of an active message;
    /// inert messages never resolve their source tag.
    pub fn tagged(source: &'static str) -> Self {
        let buffer = if Self::ACTIVE {
            let mut buf = String::new();
            buf.push('[');
            buf.push_str(short_type_name(source));
            buf.push_str("] ");
            Some(buf)
        } else {
            None
        };
        LogMessage { buffer }
    }

    /// An untagged message holding one appended value.
    pub fn with_message<T: fmt::Display>(value: T) -> Self {
        let mut message = Self::new();
        message.push(value);
        message
    }

    /// Append the textual rendering of `value`, returning the message for
    /// chaining.
    pub fn append<T: fmt::Display>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append the textual rendering of `value` in place.
    pub fn push<T: fmt::Display>(&mut self, value: T) {
        if Self::ACTIVE {
            if let Some(buffer) = self.buffer.as_mut() {
                // Writing into a String cannot fail.
                let _ = write!(buffer, "{value}");
            }
        }
    }
}

impl<const LEVEL: u8, const CUTOFF: u8, const ENABLED: bool> Default
    for LogMessage<LEVEL, CUTOFF, ENABLED>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const LEVEL: u8, const CUTOFF: u8, const ENABLED: bool> Drop
    for LogMessage<LEVEL, CUTOFF, ENABLED>
{
    fn drop(&mut self) {
        if Self::ACTIVE {
            if let Some(text) = self.buffer.take() {
                // A panicking renderer unwinding through the statement kills
                // the statement, not the writer: the half-built text is
                // discarded and the writer lock was never touched.
                if std::thread::panicking() {
                    return;
                }
                // Write failures have nowhere to go from a destructor;
                // logging never panics the host program.
                let _ = sink::global().write(&text, LogLevel::from_raw(LEVEL));
            }
        }
    }
}

/// Last path segment of a type path, ignoring `::` inside generic arguments.
fn short_type_name(full: &str) -> &str {
    let bytes = full.as_bytes();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && i + 1 < bytes.len() && bytes[i + 1] == b':' => {
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    &full[start..]
}
