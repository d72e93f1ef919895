//! Core logging types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod log_message;
pub mod prefix;
pub mod sink;
pub mod writer;

pub use config::{
    ScopeConfig, WriterConfig, WriterKind, DEFAULT_LOG_FILE_PATH, GLOBAL_CUTOFF,
    GLOBAL_CUTOFF_RAW, GLOBAL_ENABLED,
};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_message::LogMessage;
pub use prefix::PrefixTable;
pub use writer::LogWriter;
