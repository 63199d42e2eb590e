use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Price data format error: {0}")]
    DataFormatError(String),
}

impl EngineError {
    /// Whether the failure came from the caller's input rather than the
    /// environment. The CLI uses this to pick its exit code.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::ConfigError(_)
                | EngineError::CsvSystemError { .. }
                | EngineError::JsonError { .. }
                | EngineError::DataFormatError(_)
        )
    }
}
