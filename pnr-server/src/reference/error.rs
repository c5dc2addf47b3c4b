//! Reference data error types.

/// Errors that can occur while loading reference tables from disk.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape
    #[error("malformed reference file {path}: {message}")]
    Json { path: String, message: String },

    /// The background reload task panicked or was cancelled
    #[error("reference reload task failed: {0}")]
    Reload(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ReferenceError::Json {
            path: "data/airlines.json".into(),
            message: "expected value at line 1 column 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed reference file data/airlines.json: expected value at line 1 column 1"
        );

        let err = ReferenceError::Io {
            path: "data/airportDatabase.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read data/airportDatabase.json: denied");
    }
}
