//! # Static Logger System
//!
//! A compile-time configurable Rust logging framework: log statements whose
//! severity is statically below their scope's cutoff cost nothing at run
//! time, enabled statements buffer their message and emit it exactly once,
//! thread-safely, when the statement ends.
//!
//! ## Features
//!
//! - **Zero-cost suppression**: the emit/suppress decision is a const
//!   predicate over the statement's const-generic parameters; suppressed
//!   statements never allocate, format or branch
//! - **Per-scope configuration**: modules bind their own enable flag and
//!   cutoff with [`log_scope!`], fixed at build time
//! - **Thread safe**: one process-wide writer serializes whole lines under
//!   a mutex, writes from one thread appear in program order
//! - **Console and file targets**: plus a null writer fallback, so bad
//!   configuration silences logging instead of crashing the host
//!
//! ## Quick start
//!
//! ```
//! use static_logger_system::{log_info, log_scope, log_warn};
//!
//! log_scope!();
//!
//! log_info!("listening on {}", "0.0.0.0:8080");
//! log_warn!().append("queue depth ").append(128);
//! ```
//!
//! The global cutoff defaults to info and is selected at build time through
//! the `global-level-*` cargo features; `global-disable` suppresses every
//! statement in the program. The writer destination is configured once per
//! process, see [`core::sink`].

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::sink;
    pub use crate::core::{
        LogLevel, LogMessage, LogWriter, LoggerError, PrefixTable, Result, ScopeConfig,
        WriterConfig, WriterKind, DEFAULT_LOG_FILE_PATH, GLOBAL_CUTOFF, GLOBAL_CUTOFF_RAW,
        GLOBAL_ENABLED,
    };
    #[cfg(feature = "console")]
    pub use crate::writers::ConsoleWriter;
    #[cfg(feature = "file")]
    pub use crate::writers::FileWriter;
    pub use crate::writers::NullWriter;
}

pub use crate::core::{
    LogLevel, LogMessage, LogWriter, LoggerError, PrefixTable, Result, ScopeConfig,
    WriterConfig, WriterKind, DEFAULT_LOG_FILE_PATH, GLOBAL_CUTOFF, GLOBAL_CUTOFF_RAW,
    GLOBAL_ENABLED,
};
#[cfg(feature = "console")]
pub use crate::writers::ConsoleWriter;
#[cfg(feature = "file")]
pub use crate::writers::FileWriter;
pub use crate::writers::NullWriter;
