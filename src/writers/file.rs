//! File writer implementation

use crate::core::{LogLevel, LogWriter, LoggerError, PrefixTable, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes prefixed lines to a log file.
///
/// The file is truncated when the writer is created and flushed after every
/// message: durability over throughput, as fits a diagnostic logger. If the
/// file cannot be opened, [`FileWriter::create`] returns
/// [`LoggerError::FileOpen`] and the configuration layer degrades to the
/// null writer.
#[derive(Debug)]
pub struct FileWriter {
    prefixes: PrefixTable,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl FileWriter {
    pub fn create(path: impl Into<PathBuf>, colorize: bool) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| LoggerError::file_open(path.display().to_string(), source))?;

        Ok(FileWriter {
            prefixes: PrefixTable::new(colorize),
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for FileWriter {
    fn write(&self, message: &str, level: LogLevel) -> Result<()> {
        let prefix = self.prefixes.lookup(level);
        let mut writer = self.writer.lock();
        writeln!(writer, "{prefix}{message}")?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        // Ensure buffered data reaches the file at process teardown.
        let _ = self.writer.get_mut().flush();
    }
}
