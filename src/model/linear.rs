//! Fitted linear regression: `y = w^T x + b`.
//!
//! Coefficients are stored as plain `f64` vectors in the artifact
//! ([`SerializableLinearParams`]) and converted to an `ndarray` vector for
//! inference ([`LinearParams`]).

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::model::InferenceModel;
use crate::preprocessing::PreprocessingError;

/// Fitted parameters of a linear model: weights and bias.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearParams {
    pub weights: Array1<f64>,
    pub bias: f64,
}

/// Serializable representation of linear model parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerializableLinearParams {
    /// One coefficient per preprocessed feature.
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl From<&LinearParams> for SerializableLinearParams {
    fn from(params: &LinearParams) -> Self {
        Self {
            coef: params.weights.to_vec(),
            intercept: params.bias,
        }
    }
}

impl TryFrom<SerializableLinearParams> for LinearParams {
    type Error = PreprocessingError;

    fn try_from(value: SerializableLinearParams) -> Result<Self, Self::Error> {
        if value.coef.is_empty() {
            return Err(PreprocessingError::InvalidParameter(
                "linear model has no coefficients".to_string(),
            ));
        }
        if let Some(pos) = value.coef.iter().position(|w| !w.is_finite()) {
            return Err(PreprocessingError::NonFinite(format!("coefficient {pos}")));
        }
        if !value.intercept.is_finite() {
            return Err(PreprocessingError::NonFinite("intercept".to_string()));
        }
        Ok(Self {
            weights: Array1::from(value.coef),
            bias: value.intercept,
        })
    }
}

/// A fitted linear model.
#[derive(Clone, Debug)]
pub struct LinearModel {
    params: LinearParams,
}

impl LinearModel {
    /// Creates a fitted linear model from trained parameters.
    pub fn new(params: LinearParams) -> Self {
        Self { params }
    }

    /// Number of features the model consumes.
    pub fn n_features(&self) -> usize {
        self.params.weights.len()
    }

    pub fn params(&self) -> &LinearParams {
        &self.params
    }
}

impl InferenceModel for LinearModel {
    type Input = Array1<f64>;
    type Output = f64;
    type ParamsRepr = SerializableLinearParams;

    fn predict(&self, input: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        predict_view(&self.params, input.view())
    }

    fn extract_params(&self) -> Self::ParamsRepr {
        (&self.params).into()
    }

    fn from_params(params: Self::ParamsRepr) -> Result<Self, PreprocessingError> {
        LinearParams::try_from(params).map(Self::new)
    }
}

fn predict_view(params: &LinearParams, x: ArrayView1<'_, f64>) -> Result<f64, PreprocessingError> {
    if x.len() != params.weights.len() {
        return Err(PreprocessingError::FeatureMismatch {
            expected_features: params.weights.len(),
            got_features: x.len(),
        });
    }
    Ok(params.weights.dot(&x) + params.bias)
}
