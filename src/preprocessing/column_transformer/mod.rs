//! ColumnTransformer for applying different transformers to different columns.
//!
//! This module provides the fitted `ColumnTransformer`, which encodes named
//! column subsets and passes the remaining columns through.

#[allow(clippy::module_inception)]
mod column_transformer;

pub use column_transformer::{
    ColumnTransformerBuilder, ColumnTransformerParams, ColumnTransformerStepParams,
    FittedColumnTransformer, FittedColumnTransformerStep, Remainder, StepParams,
};
