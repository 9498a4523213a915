//! Error types for str-fixtures
//!
//! Every failure in the generator is fatal; this enum exists so the cause
//! reaches `main` with enough context to print a useful message.

use thiserror::Error;

/// Main error type for fixture generation
#[derive(Error, Debug)]
pub enum FixtureError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Arrow array or IPC error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet encode/decode error
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// JSON config parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is well-formed but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// No values to write
    #[error("Dataset is empty or has no rows")]
    EmptyDataset,

    /// Column not found in decoded data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Column exists but is not a text column
    #[error("Type conversion error: {0}")]
    TypeConversion(String),

    /// Decoded schema differs from the one written
    #[error("Schema mismatch: expected {expected}, got {actual}")]
    SchemaMismatch { expected: String, actual: String },

    /// IPC file carries the wrong number of record batches
    #[error("Expected {expected} record batch(es), found {actual}")]
    BatchCount { expected: usize, actual: usize },

    /// A decoded row differs from the one written
    #[error("Row {row} mismatch: expected {expected:?}, got {actual:?}")]
    RowMismatch {
        row: usize,
        expected: Option<String>,
        actual: Option<String>,
    },
}

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

impl FixtureError {
    /// Get a short message suitable for printing on stderr
    pub fn user_message(&self) -> String {
        match self {
            FixtureError::FileIo(e) => format!("File error: {}", e),
            FixtureError::Arrow(e) => format!("Arrow error: {}", e),
            FixtureError::Parquet(e) => format!("Parquet error: {}", e),
            FixtureError::Json(e) => format!("Config file is not valid JSON: {}", e),
            FixtureError::Config(msg) => format!("Config error: {}", msg),
            FixtureError::EmptyDataset => "Dataset is empty".to_string(),
            FixtureError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            FixtureError::TypeConversion(msg) => format!("Type error: {}", msg),
            FixtureError::SchemaMismatch { expected, actual } => {
                format!("Schema {} does not match {}", actual, expected)
            }
            FixtureError::BatchCount { expected, actual } => {
                format!("Wrote {} batches, wanted {}", actual, expected)
            }
            FixtureError::RowMismatch {
                row,
                expected,
                actual,
            } => format!(
                "Row {} is {:?}, wanted {:?}",
                row,
                actual.as_deref().unwrap_or("null"),
                expected.as_deref().unwrap_or("null")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FixtureError::ColumnNotFound {
            column: "str".to_string(),
        };
        assert_eq!(err.user_message(), "Column 'str' not found");

        let err = FixtureError::BatchCount {
            expected: 1,
            actual: 3,
        };
        assert_eq!(err.user_message(), "Wrote 3 batches, wanted 1");

        let err = FixtureError::RowMismatch {
            row: 2,
            expected: Some("boat".to_string()),
            actual: None,
        };
        assert_eq!(err.user_message(), "Row 2 is \"null\", wanted \"boat\"");
    }

    #[test]
    fn test_user_message_is_one_line() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: FixtureError = io_err.into();
        let msg = err.user_message();
        assert_eq!(msg, "File error: read-only");
        assert!(!msg.contains('\n'));
        assert_ne!(msg, format!("{:?}", err));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FixtureError = io_err.into();
        assert!(matches!(err, FixtureError::FileIo(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FixtureError = json_err.into();
        assert!(matches!(err, FixtureError::Json(_)));
    }
}
