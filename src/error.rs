//! Error types for loading the price model and running a prediction.

use std::path::PathBuf;

use thiserror::Error;

use crate::preprocessing::PreprocessingError;

/// Result type alias for predictor operations.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Every way a prediction run can fail.
///
/// All variants are terminal for the command-line adapter: they are reported
/// once on standard error and the process exits with status 1.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// The model artifact does not exist at the resolved path.
    #[error("'{}' not found in the parent directory ({})", artifact_name(.path), .path.display())]
    ModelNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The artifact exists but could not be read or decoded.
    #[error("failed to load model from {}: {reason}", .path.display())]
    ModelLoad {
        /// Path of the artifact.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The columns the model was fitted on differ from the input row layout.
    #[error("model expects columns {expected:?}, input row has {found:?}")]
    SchemaMismatch {
        /// Columns recorded in the artifact.
        expected: Vec<String>,
        /// Columns of the row this program builds.
        found: Vec<String>,
    },

    /// Fewer positional arguments than input columns.
    #[error(
        "not all required arguments were provided (expected {expected}: car_model company year kms_driven fuel_type, got {provided})"
    )]
    MissingArguments {
        /// Number of positional arguments required.
        expected: usize,
        /// Number of positional arguments supplied.
        provided: usize,
    },

    /// The pipeline rejected the row or produced an unusable value.
    #[error("Error during prediction: {0}")]
    Prediction(#[from] PreprocessingError),

    /// A cleaned-data CSV could not be read.
    #[error("failed to read data: {0}")]
    Data(#[from] csv::Error),

    /// JSON rendering or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PredictorError {
    /// The single diagnostic line written to standard error.
    ///
    /// Prediction failures already carry their own prefix; everything else is
    /// prefixed with `Error:`.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Prediction(_) => self.to_string(),
            _ => format!("Error: {self}"),
        }
    }
}

fn artifact_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
