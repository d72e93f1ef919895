//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from a writer stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The log file could not be opened
    #[error("failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The options map named a writer type this build does not provide
    #[error("unrecognized writer type '{kind}', no messages will be logged")]
    UnknownWriterKind { kind: String },
}

impl LoggerError {
    /// Create a file open error with the offending path
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown writer kind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        LoggerError::UnknownWriterKind { kind: kind.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::file_open("/var/log/app.log", io_err);
        assert!(matches!(err, LoggerError::FileOpen { .. }));

        let err = LoggerError::unknown_kind("udp");
        assert!(matches!(err, LoggerError::UnknownWriterKind { .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::file_open("/missing/run.log", io_err);
        assert!(err.to_string().contains("/missing/run.log"));
        assert!(err.to_string().contains("no such directory"));

        let err = LoggerError::unknown_kind("network");
        assert_eq!(
            err.to_string(),
            "unrecognized writer type 'network', no messages will be logged"
        );
    }
}
