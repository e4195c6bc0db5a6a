//! One-hot encoding for categorical features.
//!
//! Transforms string categories to one-hot (dummy) encoded vectors.

use crate::preprocessing::encoding::HandleUnknown;
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::FittedTransformer;
use ndarray::{Array1, ArrayViewMut1};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable parameters for a fitted OneHotEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoderParams {
    /// Categories for each input column, in output order.
    pub categories: Vec<Vec<String>>,
    /// Handle unknown strategy.
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
}

/// Fitted OneHotEncoder ready for inference.
///
/// Each input column owns a contiguous block of output features, one per
/// category. A known value sets its slot to `1.0` and leaves the rest of the
/// block at `0.0`.
///
/// # Example
/// ```
/// use carprice::preprocessing::{FittedOneHotEncoder, FittedTransformer};
///
/// let encoder = FittedOneHotEncoder::new(vec![
///     vec!["Hyundai".to_string(), "Maruti".to_string()],
///     vec!["Diesel".to_string(), "Petrol".to_string()],
/// ])?;
///
/// let encoded = encoder.transform(&["Maruti".to_string(), "Diesel".to_string()])?;
/// assert_eq!(encoded.to_vec(), vec![0.0, 1.0, 1.0, 0.0]);
/// # Ok::<(), carprice::preprocessing::PreprocessingError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FittedOneHotEncoder {
    /// Categories for each input column.
    categories: Vec<Vec<String>>,
    /// Category -> slot lookup for each input column.
    index: Vec<HashMap<String, usize>>,
    /// Start of each column's block in the output.
    offsets: Vec<usize>,
    /// Total number of output features.
    n_features_out: usize,
    /// Handle unknown strategy.
    handle_unknown: HandleUnknown,
}

impl FittedOneHotEncoder {
    /// Build an encoder from per-column category lists, rejecting unknown values.
    pub fn new(categories: Vec<Vec<String>>) -> Result<Self, PreprocessingError> {
        Self::from_params(OneHotEncoderParams {
            categories,
            handle_unknown: HandleUnknown::default(),
        })
    }

    /// Set the strategy for handling unknown categories.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.handle_unknown = strategy;
        self
    }

    /// Get the categories learned for each feature.
    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    /// Get the unknown-category strategy.
    pub fn handle_unknown(&self) -> HandleUnknown {
        self.handle_unknown
    }

    /// Output feature names in `column_category` form.
    pub fn feature_names_out(&self, input_names: &[String]) -> Vec<String> {
        input_names
            .iter()
            .zip(&self.categories)
            .flat_map(|(name, cats)| cats.iter().map(move |cat| format!("{name}_{cat}")))
            .collect()
    }

    /// Encode one row of this encoder's columns into `out`.
    ///
    /// `out` must be exactly [`n_features_out`](FittedTransformer::n_features_out) long.
    pub fn encode_into(
        &self,
        values: &[&str],
        mut out: ArrayViewMut1<'_, f64>,
    ) -> Result<(), PreprocessingError> {
        if values.len() != self.categories.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.categories.len(),
                got_features: values.len(),
            });
        }
        if out.len() != self.n_features_out {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.n_features_out,
                got_features: out.len(),
            });
        }

        out.fill(0.0);
        for (col, value) in values.iter().enumerate() {
            match self.index[col].get(*value) {
                Some(&slot) => out[self.offsets[col] + slot] = 1.0,
                None => {
                    if self.handle_unknown == HandleUnknown::Error {
                        return Err(PreprocessingError::UnknownCategory {
                            column: col,
                            value: (*value).to_string(),
                        });
                    }
                    // With Ignore, leave the block at zero
                }
            }
        }

        Ok(())
    }
}

impl FittedTransformer for FittedOneHotEncoder {
    type Input = [String];
    type Output = Array1<f64>;
    type Params = OneHotEncoderParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let values: Vec<&str> = data.iter().map(String::as_str).collect();
        let mut out = Array1::zeros(self.n_features_out);
        self.encode_into(&values, out.view_mut())?;
        Ok(out)
    }

    fn extract_params(&self) -> Self::Params {
        OneHotEncoderParams {
            categories: self.categories.clone(),
            handle_unknown: self.handle_unknown,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        if params.categories.is_empty() {
            return Err(PreprocessingError::InvalidParameter(
                "OneHotEncoder needs at least one column".to_string(),
            ));
        }

        let mut index = Vec::with_capacity(params.categories.len());
        let mut offsets = Vec::with_capacity(params.categories.len());
        let mut n_features_out = 0;

        for (col, cats) in params.categories.iter().enumerate() {
            if cats.is_empty() {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "OneHotEncoder column {col} has no categories"
                )));
            }

            let mut lookup = HashMap::with_capacity(cats.len());
            for (slot, cat) in cats.iter().enumerate() {
                if lookup.insert(cat.clone(), slot).is_some() {
                    return Err(PreprocessingError::InvalidParameter(format!(
                        "OneHotEncoder column {col} lists category '{cat}' twice"
                    )));
                }
            }

            offsets.push(n_features_out);
            n_features_out += cats.len();
            index.push(lookup);
        }

        Ok(Self {
            categories: params.categories,
            index,
            offsets,
            n_features_out,
            handle_unknown: params.handle_unknown,
        })
    }

    fn n_features_in(&self) -> usize {
        self.categories.len()
    }

    fn n_features_out(&self) -> usize {
        self.n_features_out
    }
}
