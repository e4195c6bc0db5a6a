//! Where the model artifact lives and how predictions are printed.
//!
//! # Example
//!
//! ```
//! use carprice::config::PredictorConfig;
//!
//! let config = PredictorConfig::new()
//!     .with_model_path("/srv/models/LinearRegressionModel.bin")
//!     .with_decimals(2);
//! assert_eq!(config.decimals(), 2);
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the serialized pipeline.
pub const DEFAULT_ARTIFACT_NAME: &str = "LinearRegressionModel.bin";

/// Decimal places in the printed prediction.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Settings for loading the model and formatting its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Explicit artifact path. When unset the artifact is looked up next to
    /// the directory that holds the executable.
    model_path: Option<PathBuf>,
    /// Artifact file name used for the default lookup.
    artifact_name: String,
    /// Decimal places in the printed prediction.
    decimals: u32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl PredictorConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit artifact path.
    #[must_use]
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Change the artifact file name used for the default lookup.
    #[must_use]
    pub fn with_artifact_name(mut self, name: impl Into<String>) -> Self {
        self.artifact_name = name.into();
        self
    }

    /// Set the number of decimal places in the output.
    #[must_use]
    pub const fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    #[must_use]
    pub fn artifact_name(&self) -> &str {
        &self.artifact_name
    }

    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// The artifact path this configuration points at.
    ///
    /// # Errors
    /// Fails only when the running executable's path cannot be determined.
    pub fn resolve_model_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.model_path {
            return Ok(path.clone());
        }
        let exe = std::env::current_exe()?;
        Ok(model_dir_for(&exe).join(&self.artifact_name))
    }
}

/// Directory searched for the artifact: the parent of the executable's directory.
///
/// An executable sitting at the filesystem root falls back to its own directory.
pub fn model_dir_for(exe: &Path) -> PathBuf {
    let bin_dir = exe.parent().unwrap_or_else(|| Path::new(""));
    match bin_dir.parent() {
        Some(dir) if dir.as_os_str().is_empty() => PathBuf::from("."),
        Some(dir) => dir.to_path_buf(),
        None if bin_dir.as_os_str().is_empty() => PathBuf::from(".."),
        None => bin_dir.to_path_buf(),
    }
}
