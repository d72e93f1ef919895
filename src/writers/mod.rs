//! Writer implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod null;

#[cfg(feature = "console")]
pub use console::ConsoleWriter;
#[cfg(feature = "file")]
pub use file::FileWriter;
pub use null::NullWriter;

// Re-export the trait next to its implementations.
pub use crate::core::LogWriter;
