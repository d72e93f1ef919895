//! Process-wide writer state
//!
//! This module is the one place in the crate that owns a singleton. The
//! lifecycle is deliberately narrow:
//!
//! - The state machine is `Unconfigured -> Configured`, and `Configured`
//!   is terminal for the process lifetime. There is no teardown; the file
//!   writer flushes on every write and again on drop at process exit.
//! - The first successful [`configure`], [`configure_from_options`] or
//!   [`install`] call wins. Every later call returns `false` and changes
//!   nothing.
//! - If a message is emitted before anything was configured, the default
//!   writer (uncolored console) is installed on first use, after which
//!   configuration attempts are likewise ignored. Hosts that want a file
//!   destination must therefore configure before their first enabled log
//!   statement.
//!
//! Invalid configuration never panics: an unrecognized writer type or an
//! unopenable log file installs the [`NullWriter`] so that logging degrades
//! to silence, with one best-effort diagnostic on standard error.

use super::config::{WriterConfig, WriterKind, GLOBAL_CUTOFF, GLOBAL_ENABLED};
use super::error::LoggerError;
use super::log_level::LogLevel;
use super::writer::LogWriter;
use crate::writers::NullWriter;
use std::sync::OnceLock;

static GLOBAL_WRITER: OnceLock<Box<dyn LogWriter>> = OnceLock::new();

/// Install the writer described by `config` as the process-wide sink.
///
/// Returns `false` if a writer is already installed (including the lazily
/// installed default); the call is then ignored.
pub fn configure(config: WriterConfig) -> bool {
    install(build_writer(config))
}

/// Parse the string-keyed options map and install the described writer.
///
/// Recognized keys are documented on [`WriterConfig::from_options`]. An
/// unrecognized `type` installs the null writer, so a bad configuration
/// silences logging instead of crashing the host.
pub fn configure_from_options<I, K, V>(options: I) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    match WriterConfig::from_options(options) {
        Ok(config) => configure(config),
        Err(error) => {
            fallback_diagnostic(&error);
            install(Box::new(NullWriter::new()))
        }
    }
}

/// Install a caller-provided writer as the process-wide sink.
///
/// First successful installation wins, as with [`configure`].
pub fn install(writer: Box<dyn LogWriter>) -> bool {
    GLOBAL_WRITER.set(writer).is_ok()
}

/// The process-wide writer, installing the default uncolored console
/// writer on first use if nothing was configured.
pub fn global() -> &'static dyn LogWriter {
    GLOBAL_WRITER
        .get_or_init(|| build_writer(WriterConfig::default()))
        .as_ref()
}

fn build_writer(config: WriterConfig) -> Box<dyn LogWriter> {
    let writer: Box<dyn LogWriter> = match config.kind {
        #[cfg(feature = "console")]
        WriterKind::Console => Box::new(crate::writers::ConsoleWriter::new(config.colorize)),
        #[cfg(feature = "file")]
        WriterKind::File => {
            match crate::writers::FileWriter::create(config.path_or_default(), config.colorize) {
                Ok(writer) => Box::new(writer),
                Err(error) => {
                    fallback_diagnostic(&error);
                    return Box::new(NullWriter::new());
                }
            }
        }
        #[allow(unreachable_patterns)]
        kind => {
            // The requested destination was compiled out of this build.
            fallback_diagnostic(&LoggerError::unknown_kind(format!("{kind:?}")));
            return Box::new(NullWriter::new());
        }
    };

    creation_notice(writer.as_ref());
    writer
}

/// One debug line stating the build-time cutoff, written through the newly
/// built writer. Suppressed unless the global cutoff admits debug.
fn creation_notice(writer: &dyn LogWriter) {
    if GLOBAL_ENABLED && LogLevel::DEBUG >= GLOBAL_CUTOFF {
        let _ = writer.write(
            &format!("logging configured, global cutoff {GLOBAL_CUTOFF}"),
            LogLevel::DEBUG,
        );
    }
}

/// Best-effort diagnostic when configuration degrades to the null writer.
/// Suppressed if the build-time cutoff excludes error-level messages.
fn fallback_diagnostic(error: &LoggerError) {
    if GLOBAL_ENABLED && LogLevel::ERROR >= GLOBAL_CUTOFF {
        eprintln!("[ERROR] {error}");
    }
}
