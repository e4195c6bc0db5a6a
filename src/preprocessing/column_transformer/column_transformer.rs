//! Fitted ColumnTransformer implementation.
//!
//! Applies encoders to named column subsets, passes untouched columns through
//! as numbers, and concatenates everything into one feature vector.

use crate::preprocessing::encoding::{FittedOneHotEncoder, OneHotEncoderParams};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::FittedTransformer;
use crate::schema::InputRow;
use ndarray::{s, Array1};
use serde::{Deserialize, Serialize};

/// What happens to input columns no transformer claims.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Remainder {
    /// Leave them out of the output.
    #[default]
    Drop,
    /// Parse them as numbers and append them, in input order.
    Passthrough,
}

/// Serializable parameters of one column transformer step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnTransformerStepParams {
    OneHotEncoder(OneHotEncoderParams),
}

/// A named step applied to a set of named columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepParams {
    /// Step name, e.g. `onehotencoder`.
    pub name: String,
    /// Input columns this step consumes.
    pub columns: Vec<String>,
    /// Fitted parameters of the step.
    pub step: ColumnTransformerStepParams,
}

/// Serializable parameters for a fitted ColumnTransformer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnTransformerParams {
    /// Column names seen during fit, in order.
    pub feature_names_in: Vec<String>,
    /// Steps in output order.
    pub steps: Vec<StepParams>,
    /// Policy for unclaimed columns.
    #[serde(default)]
    pub remainder: Remainder,
}

/// Enum of fitted transformers for ColumnTransformer.
#[derive(Clone, Debug)]
pub enum FittedColumnTransformerStep {
    OneHotEncoder(FittedOneHotEncoder),
}

impl FittedColumnTransformerStep {
    fn encode_into(
        &self,
        values: &[&str],
        out: ndarray::ArrayViewMut1<'_, f64>,
    ) -> Result<(), PreprocessingError> {
        match self {
            FittedColumnTransformerStep::OneHotEncoder(t) => t.encode_into(values, out),
        }
    }

    fn n_features_in(&self) -> usize {
        match self {
            FittedColumnTransformerStep::OneHotEncoder(t) => t.n_features_in(),
        }
    }

    fn n_features_out(&self) -> usize {
        match self {
            FittedColumnTransformerStep::OneHotEncoder(t) => t.n_features_out(),
        }
    }

    fn feature_names_out(&self, columns: &[String]) -> Vec<String> {
        match self {
            FittedColumnTransformerStep::OneHotEncoder(t) => t.feature_names_out(columns),
        }
    }

    fn extract_params(&self) -> ColumnTransformerStepParams {
        match self {
            FittedColumnTransformerStep::OneHotEncoder(t) => {
                ColumnTransformerStepParams::OneHotEncoder(t.extract_params())
            }
        }
    }

    fn from_params(params: ColumnTransformerStepParams) -> Result<Self, PreprocessingError> {
        match params {
            ColumnTransformerStepParams::OneHotEncoder(p) => {
                FittedOneHotEncoder::from_params(p).map(FittedColumnTransformerStep::OneHotEncoder)
            }
        }
    }
}

#[derive(Clone, Debug)]
struct FittedStep {
    name: String,
    columns: Vec<String>,
    /// Positions of `columns` within `feature_names_in`.
    indices: Vec<usize>,
    step: FittedColumnTransformerStep,
}

/// Fitted ColumnTransformer ready for inference.
///
/// # Example
/// ```
/// use carprice::preprocessing::{ColumnTransformerBuilder, FittedOneHotEncoder, FittedTransformer, Remainder};
/// use carprice::schema::InputRow;
///
/// let encoder = FittedOneHotEncoder::new(vec![vec!["Diesel".into(), "Petrol".into()]])?;
/// let ct = ColumnTransformerBuilder::new(["fuel_type", "year"])
///     .add_one_hot_encoder("onehotencoder", ["fuel_type"], encoder)
///     .remainder(Remainder::Passthrough)
///     .build()?;
///
/// let row = InputRow::new(
///     vec!["fuel_type".into(), "year".into()],
///     vec!["Petrol".into(), "2014".into()],
/// ).unwrap();
/// assert_eq!(ct.transform(&row)?.to_vec(), vec![0.0, 1.0, 2014.0]);
/// # Ok::<(), carprice::preprocessing::PreprocessingError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FittedColumnTransformer {
    feature_names_in: Vec<String>,
    steps: Vec<FittedStep>,
    remainder: Remainder,
    /// Unclaimed column positions, in input order.
    remainder_indices: Vec<usize>,
    n_features_out: usize,
}

impl FittedColumnTransformer {
    /// Column names seen during fit.
    pub fn feature_names_in(&self) -> &[String] {
        &self.feature_names_in
    }

    /// Policy for unclaimed columns.
    pub fn remainder(&self) -> Remainder {
        self.remainder
    }

    /// Columns not consumed by any step.
    pub fn remainder_columns(&self) -> Vec<&str> {
        self.remainder_indices
            .iter()
            .map(|&i| self.feature_names_in[i].as_str())
            .collect()
    }

    /// Step names with the columns each one consumes.
    pub fn step_names(&self) -> Vec<(&str, &[String])> {
        self.steps
            .iter()
            .map(|s| (s.name.as_str(), s.columns.as_slice()))
            .collect()
    }

    /// Categories of every one-hot encoded column, keyed by column name.
    pub fn one_hot_categories(&self) -> Vec<(&str, &[String])> {
        self.steps
            .iter()
            .flat_map(|s| match &s.step {
                FittedColumnTransformerStep::OneHotEncoder(enc) => s
                    .columns
                    .iter()
                    .map(String::as_str)
                    .zip(enc.categories().iter().map(Vec::as_slice))
                    .collect::<Vec<_>>(),
            })
            .collect()
    }

    /// Names of the produced features, in output order.
    pub fn feature_names_out(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .steps
            .iter()
            .flat_map(|s| s.step.feature_names_out(&s.columns))
            .collect();
        if self.remainder == Remainder::Passthrough {
            names.extend(self.remainder_columns().into_iter().map(str::to_string));
        }
        names
    }

    fn check_columns(&self, row: &InputRow) -> Result<(), PreprocessingError> {
        if row.len() != self.feature_names_in.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.feature_names_in.len(),
                got_features: row.len(),
            });
        }
        if row.columns() != self.feature_names_in.as_slice() {
            return Err(PreprocessingError::ColumnMismatch {
                expected: self.feature_names_in.clone(),
                got: row.columns().to_vec(),
            });
        }
        Ok(())
    }
}

/// Read a passthrough cell as a number.
fn parse_numeric(column: &str, value: &str) -> Result<f64, PreprocessingError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| PreprocessingError::NotNumeric(value.to_string()))?;
    if !parsed.is_finite() {
        return Err(PreprocessingError::NonFinite(format!(
            "column '{column}' = '{value}'"
        )));
    }
    Ok(parsed)
}

impl FittedTransformer for FittedColumnTransformer {
    type Input = InputRow;
    type Output = Array1<f64>;
    type Params = ColumnTransformerParams;

    fn transform(&self, row: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        self.check_columns(row)?;

        let values = row.values();
        let mut out = Array1::zeros(self.n_features_out);
        let mut offset = 0;

        for step in &self.steps {
            let width = step.step.n_features_out();
            let cells: Vec<&str> = step.indices.iter().map(|&i| values[i].as_str()).collect();
            step.step
                .encode_into(&cells, out.slice_mut(s![offset..offset + width]))?;
            offset += width;
        }

        if self.remainder == Remainder::Passthrough {
            for &i in &self.remainder_indices {
                out[offset] = parse_numeric(&self.feature_names_in[i], &values[i])?;
                offset += 1;
            }
        }

        Ok(out)
    }

    fn extract_params(&self) -> Self::Params {
        ColumnTransformerParams {
            feature_names_in: self.feature_names_in.clone(),
            steps: self
                .steps
                .iter()
                .map(|s| StepParams {
                    name: s.name.clone(),
                    columns: s.columns.clone(),
                    step: s.step.extract_params(),
                })
                .collect(),
            remainder: self.remainder,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        let n_in = params.feature_names_in.len();
        if n_in == 0 {
            return Err(PreprocessingError::InvalidParameter(
                "ColumnTransformer needs at least one input column".to_string(),
            ));
        }
        for (i, name) in params.feature_names_in.iter().enumerate() {
            if params.feature_names_in[..i].contains(name) {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "input column '{name}' appears twice"
                )));
            }
        }

        let mut claimed = vec![false; n_in];
        let mut steps = Vec::with_capacity(params.steps.len());
        let mut n_features_out = 0;

        for step_params in params.steps {
            let mut indices = Vec::with_capacity(step_params.columns.len());
            for column in &step_params.columns {
                let idx = params
                    .feature_names_in
                    .iter()
                    .position(|c| c == column)
                    .ok_or_else(|| PreprocessingError::UnknownColumn(column.clone()))?;
                if claimed[idx] {
                    return Err(PreprocessingError::InvalidParameter(format!(
                        "column '{column}' is used by more than one transformer"
                    )));
                }
                claimed[idx] = true;
                indices.push(idx);
            }

            let step = FittedColumnTransformerStep::from_params(step_params.step)?;
            if step.n_features_in() != indices.len() {
                return Err(PreprocessingError::FeatureMismatch {
                    expected_features: step.n_features_in(),
                    got_features: indices.len(),
                });
            }

            n_features_out += step.n_features_out();
            steps.push(FittedStep {
                name: step_params.name,
                columns: step_params.columns,
                indices,
                step,
            });
        }

        let remainder_indices: Vec<usize> = (0..n_in).filter(|&i| !claimed[i]).collect();
        if params.remainder == Remainder::Passthrough {
            n_features_out += remainder_indices.len();
        }

        Ok(Self {
            feature_names_in: params.feature_names_in,
            steps,
            remainder: params.remainder,
            remainder_indices,
            n_features_out,
        })
    }

    fn n_features_in(&self) -> usize {
        self.feature_names_in.len()
    }

    fn n_features_out(&self) -> usize {
        self.n_features_out
    }
}

/// Assembles a [`FittedColumnTransformer`] from already fitted encoders.
#[derive(Clone, Debug)]
pub struct ColumnTransformerBuilder {
    params: ColumnTransformerParams,
}

impl ColumnTransformerBuilder {
    /// Start from the input column names, in order.
    pub fn new<I, S>(feature_names_in: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: ColumnTransformerParams {
                feature_names_in: feature_names_in.into_iter().map(Into::into).collect(),
                steps: Vec::new(),
                remainder: Remainder::default(),
            },
        }
    }

    /// Add a OneHotEncoder for the named columns.
    pub fn add_one_hot_encoder<I, S>(
        mut self,
        name: impl Into<String>,
        columns: I,
        encoder: FittedOneHotEncoder,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.steps.push(StepParams {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            step: ColumnTransformerStepParams::OneHotEncoder(encoder.extract_params()),
        });
        self
    }

    /// Set the policy for unclaimed columns.
    pub fn remainder(mut self, remainder: Remainder) -> Self {
        self.params.remainder = remainder;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<FittedColumnTransformer, PreprocessingError> {
        FittedColumnTransformer::from_params(self.params)
    }
}
