//! Fitted regression models.

pub mod linear;

pub use linear::{LinearModel, LinearParams, SerializableLinearParams};

use crate::preprocessing::PreprocessingError;
use crate::serialization::SerializableParams;

/// A fitted model that maps one feature vector to one prediction.
pub trait InferenceModel {
    type Input: ?Sized;
    type Output;
    type ParamsRepr: SerializableParams;

    /// Predict on a single sample.
    fn predict(&self, input: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    fn extract_params(&self) -> Self::ParamsRepr;

    fn from_params(params: Self::ParamsRepr) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Save model parameters to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load model parameters from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::ParamsRepr::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }
}
