//! Predictive pipeline combining preprocessing and model inference.
//!
//! [`CarPricePipeline`] joins a fitted [`FittedColumnTransformer`] with a
//! fitted [`LinearModel`] and is stored as one artifact. The command-line
//! adapter only sees it through the [`Predictor`] trait.

use std::io;
use std::path::Path;

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PredictorConfig;
use crate::error::{PredictorError, Result};
use crate::model::{InferenceModel, LinearModel, SerializableLinearParams};
use crate::preprocessing::{
    ColumnTransformerParams, FittedColumnTransformer, FittedTransformer, PreprocessingError,
};
use crate::schema::{CarFeatures, InputRow, COLUMNS};
use crate::serialization::{JsonParams, SerializableParams};

/// Accepts one car and returns one price.
pub trait Predictor {
    /// Predict the price of a single car.
    ///
    /// # Errors
    /// [`PredictorError::Prediction`] when the row cannot be encoded or the
    /// result is not a finite number.
    fn predict(&self, features: &CarFeatures) -> Result<f64>;
}

/// Serializable parameters for the whole pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Column transformer parameters, including the fitted column names.
    pub preprocessor: ColumnTransformerParams,
    /// Linear regressor coefficients and intercept.
    pub regressor: SerializableLinearParams,
}

/// Column transformer followed by a linear regressor.
#[derive(Clone, Debug)]
pub struct CarPricePipeline {
    preprocessor: FittedColumnTransformer,
    regressor: LinearModel,
}

impl CarPricePipeline {
    /// Join a preprocessor and a regressor.
    ///
    /// # Errors
    /// [`PreprocessingError::FeatureMismatch`] when the regressor's coefficient
    /// count differs from the number of features the preprocessor produces.
    pub fn new(
        preprocessor: FittedColumnTransformer,
        regressor: LinearModel,
    ) -> std::result::Result<Self, PreprocessingError> {
        if preprocessor.n_features_out() != regressor.n_features() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: regressor.n_features(),
                got_features: preprocessor.n_features_out(),
            });
        }
        Ok(Self {
            preprocessor,
            regressor,
        })
    }

    /// Column names the pipeline was fitted on.
    pub fn feature_names_in(&self) -> &[String] {
        self.preprocessor.feature_names_in()
    }

    pub fn preprocessor(&self) -> &FittedColumnTransformer {
        &self.preprocessor
    }

    pub fn regressor(&self) -> &LinearModel {
        &self.regressor
    }

    /// Encode a row into the regressor's feature vector.
    pub fn preprocess(&self, row: &InputRow) -> std::result::Result<Array1<f64>, PreprocessingError> {
        self.preprocessor.transform(row)
    }

    /// Predict on one labeled row.
    pub fn predict_row(&self, row: &InputRow) -> std::result::Result<f64, PreprocessingError> {
        let features = self.preprocess(row)?;
        let price = self.regressor.predict(&features)?;
        if !price.is_finite() {
            return Err(PreprocessingError::NonFinite(format!("prediction = {price}")));
        }
        Ok(price)
    }

    /// Verify the fitted columns are exactly the [`CarFeatures`] columns.
    ///
    /// # Errors
    /// [`PredictorError::SchemaMismatch`] listing both column lists.
    pub fn check_schema(&self) -> Result<()> {
        if self.feature_names_in() != COLUMNS {
            return Err(PredictorError::SchemaMismatch {
                expected: self.feature_names_in().to_vec(),
                found: COLUMNS.iter().map(|c| c.to_string()).collect(),
            });
        }
        Ok(())
    }

    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> PipelineParams {
        PipelineParams {
            preprocessor: self.preprocessor.extract_params(),
            regressor: self.regressor.extract_params(),
        }
    }

    /// Reconstruct from parameters.
    pub fn from_params(params: PipelineParams) -> std::result::Result<Self, PreprocessingError> {
        let preprocessor = FittedColumnTransformer::from_params(params.preprocessor)?;
        let regressor = LinearModel::from_params(params.regressor)?;
        Self::new(preprocessor, regressor)
    }

    /// Save the entire pipeline to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(io::Error::other)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a pipeline from a binary artifact.
    ///
    /// # Errors
    /// - [`PredictorError::ModelNotFound`] when the file does not exist
    /// - [`PredictorError::ModelLoad`] when it cannot be read or decoded
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| load_error(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read model artifact");

        let params = PipelineParams::from_bytes(&bytes).map_err(|e| PredictorError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_params(params).map_err(|e| PredictorError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the pipeline parameters as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.extract_params().to_json()?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Load a pipeline from JSON parameters.
    ///
    /// # Errors
    /// Same as [`load_from_file`](Self::load_from_file).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| load_error(path, e))?;
        let params = PipelineParams::from_json(&text).map_err(|e| PredictorError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_params(params).map_err(|e| PredictorError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Resolve, load and schema-check the artifact a configuration points at.
    pub fn load(config: &PredictorConfig) -> Result<Self> {
        let path = config.resolve_model_path()?;
        info!(path = %path.display(), "loading model");
        let pipeline = Self::load_from_file(&path)?;
        pipeline.check_schema()?;
        debug!(
            n_features = pipeline.regressor.n_features(),
            "model ready"
        );
        Ok(pipeline)
    }
}

impl Predictor for CarPricePipeline {
    fn predict(&self, features: &CarFeatures) -> Result<f64> {
        let price = self.predict_row(&features.to_row())?;
        debug!(price, "predicted");
        Ok(price)
    }
}

fn load_error(path: &Path, err: io::Error) -> PredictorError {
    if err.kind() == io::ErrorKind::NotFound {
        PredictorError::ModelNotFound {
            path: path.to_path_buf(),
        }
    } else {
        PredictorError::ModelLoad {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}
