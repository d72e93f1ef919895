//! Scope and writer configuration
//!
//! The global `(enabled, cutoff)` pair is fixed at build time through cargo
//! features. Per-scope overrides are plain `const` values handed to the
//! [`log_scope!`](crate::log_scope) binding macro.

use super::error::LoggerError;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default path for the file writer when the options map has no `path` key.
pub const DEFAULT_LOG_FILE_PATH: &str = "marsLOG.txt";

/// Whether logging is enabled at all for this build.
///
/// The `global-disable` feature turns every log statement in the program
/// into a statically suppressed no-op.
pub const GLOBAL_ENABLED: bool = !cfg!(feature = "global-disable");

/// The build-time global cutoff level.
///
/// Selected by the `global-level-*` cargo features; since features are
/// additive across a dependency graph, the most verbose enabled feature
/// wins. Without any of them the cutoff is [`LogLevel::INFO`].
pub const GLOBAL_CUTOFF: LogLevel = global_cutoff();

/// Raw value of [`GLOBAL_CUTOFF`], usable as a const-generic argument.
pub const GLOBAL_CUTOFF_RAW: u8 = GLOBAL_CUTOFF.raw();

const fn global_cutoff() -> LogLevel {
    if cfg!(feature = "global-level-trace") {
        LogLevel::TRACE
    } else if cfg!(feature = "global-level-debug") {
        LogLevel::DEBUG
    } else if cfg!(feature = "global-level-eval") {
        LogLevel::EVAL
    } else if cfg!(feature = "global-level-info") {
        LogLevel::INFO
    } else if cfg!(feature = "global-level-warn") {
        LogLevel::WARN
    } else if cfg!(feature = "global-level-error") {
        LogLevel::ERROR
    } else if cfg!(feature = "global-level-dev") {
        LogLevel::DEV
    } else {
        LogLevel::INFO
    }
}

/// Per-scope enable flag and cutoff, bound once at build time.
///
/// A scope (a module, a type, a component) binds one of these through
/// [`log_scope!`](crate::log_scope); messages below `cutoff`, or any message
/// when `enabled` is false, are statically suppressed within that scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    pub enabled: bool,
    pub cutoff: LogLevel,
}

impl ScopeConfig {
    /// The process default: enabled, global cutoff.
    pub const DEFAULT: ScopeConfig = ScopeConfig {
        enabled: true,
        cutoff: GLOBAL_CUTOFF,
    };

    pub const fn new(enabled: bool, cutoff: LogLevel) -> Self {
        ScopeConfig { enabled, cutoff }
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        ScopeConfig::DEFAULT
    }
}

/// Writer destination kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriterKind {
    Console,
    File,
}

/// Destination and style of the process-wide writer.
///
/// Constructed directly or parsed from the string-keyed options map with
/// [`WriterConfig::from_options`]. Applied at most once per process; see
/// [`sink`](crate::core::sink) for the lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    pub kind: WriterKind,
    /// File destination only; [`DEFAULT_LOG_FILE_PATH`] when omitted.
    pub path: Option<PathBuf>,
    pub colorize: bool,
}

impl WriterConfig {
    /// Uncolored console destination (the process default).
    pub fn console() -> Self {
        WriterConfig {
            kind: WriterKind::Console,
            path: None,
            colorize: false,
        }
    }

    /// File destination at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        WriterConfig {
            kind: WriterKind::File,
            path: Some(path.into()),
            colorize: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Parse the string-keyed options map.
    ///
    /// Recognized keys: `type` (`std_cerr` or `file`), `color` (presence
    /// enables colorized prefixes, the value is ignored) and `path` (file
    /// destination only). Unrecognized keys are ignored; an unrecognized or
    /// missing `type` is an error, which the configuration layer answers by
    /// degrading to the null writer.
    pub fn from_options<I, K, V>(options: I) -> Result<Self, LoggerError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut kind = None;
        let mut path = None;
        let mut colorize = false;

        for (key, value) in options {
            match key.as_ref() {
                "type" => {
                    kind = Some(match value.as_ref() {
                        "std_cerr" => WriterKind::Console,
                        "file" => WriterKind::File,
                        other => return Err(LoggerError::unknown_kind(other)),
                    });
                }
                "color" => colorize = true,
                "path" => path = Some(PathBuf::from(value.as_ref())),
                _ => {}
            }
        }

        let kind = kind.ok_or_else(|| LoggerError::unknown_kind("<missing>"))?;
        Ok(WriterConfig {
            kind,
            path,
            colorize,
        })
    }

    /// The configured path, or the process default for file destinations.
    pub fn path_or_default(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_PATH))
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig::console()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_follows_global_config() {
        let config = ScopeConfig::default();
        assert!(config.enabled);
        assert_eq!(config.cutoff, GLOBAL_CUTOFF);
    }

    #[test]
    fn test_default_writer_is_uncolored_console() {
        let config = WriterConfig::default();
        assert_eq!(config.kind, WriterKind::Console);
        assert!(!config.colorize);
        assert!(config.path.is_none());
    }

    #[test]
    fn test_from_options_console_with_color() {
        let config =
            WriterConfig::from_options([("type", "std_cerr"), ("color", "")]).unwrap();
        assert_eq!(config.kind, WriterKind::Console);
        assert!(config.colorize);
    }

    #[test]
    fn test_from_options_file_with_default_path() {
        let config = WriterConfig::from_options([("type", "file")]).unwrap();
        assert_eq!(config.kind, WriterKind::File);
        assert_eq!(
            config.path_or_default(),
            PathBuf::from(DEFAULT_LOG_FILE_PATH)
        );
    }

    #[test]
    fn test_from_options_ignores_unknown_keys() {
        let config = WriterConfig::from_options([
            ("type", "file"),
            ("path", "/tmp/run.log"),
            ("rotation", "daily"),
        ])
        .unwrap();
        assert_eq!(config.path.as_deref(), Some(std::path::Path::new("/tmp/run.log")));
    }

    #[test]
    fn test_from_options_rejects_unknown_type() {
        let error = WriterConfig::from_options([("type", "network")]).unwrap_err();
        assert!(matches!(error, LoggerError::UnknownWriterKind { .. }));
        assert!(error.to_string().contains("network"));
    }

    #[test]
    fn test_from_options_rejects_missing_type() {
        let error =
            WriterConfig::from_options([("path", "somewhere.log")]).unwrap_err();
        assert!(matches!(error, LoggerError::UnknownWriterKind { .. }));
    }
}
