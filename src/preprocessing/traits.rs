//! Core trait for fitted preprocessing transformers.
//!
//! Fitting happens outside this crate; what arrives here is a transformer with
//! learned parameters that can transform new rows and round-trip through its
//! serializable parameter struct.

use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;

/// Trait for fitted transformers ready for inference.
///
/// # Guarantees
/// - `extract_params()` + `from_params()` is a round-trip.
/// - `save_to_file` / `load_from_file` use the same byte encoding as the model artifact.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if:
    /// - Input width doesn't match the number of features seen during fit
    /// - Input contains values the transformer cannot represent
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Save the fitted transformer to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let params = self.extract_params();
        let bytes = params.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }

    /// Returns the number of input columns seen during fit.
    fn n_features_in(&self) -> usize;

    /// Returns the number of numeric features produced per row.
    fn n_features_out(&self) -> usize;
}
