//! Error types for preprocessing and model evaluation.

use thiserror::Error;

/// Error type for preprocessing operations.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// A categorical value was not among the categories the encoder knows.
    #[error("Found unknown categories ['{value}'] in column {column} during transform")]
    UnknownCategory {
        /// Position of the column within the encoder's input.
        column: usize,
        /// The offending value.
        value: String,
    },
    /// A passthrough value could not be read as a number.
    #[error("could not convert string to float: '{0}'")]
    NotNumeric(String),
    /// Input or output contains NaN or infinity.
    #[error("Input contains NaN or infinity ({0})")]
    NonFinite(String),
    /// Feature dimension mismatch.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// A transformer refers to a column the input does not have.
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
    /// Input columns are not the ones, in order, seen during fit.
    #[error("The feature names should match those that were passed during fit: expected {expected:?}, got {got:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },
    /// Invalid fitted parameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}
