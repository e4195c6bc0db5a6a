//! Fitted preprocessing transformers for the price pipeline.
//!
//! Everything here is inference-only: transformers arrive with learned
//! parameters, turn one labeled row into a numeric feature vector, and
//! round-trip through plain parameter structs.
//!
//! # Available Transformers
//!
//! - [`FittedOneHotEncoder`]: categorical strings to dummy blocks
//! - [`FittedColumnTransformer`]: routes named columns to encoders and
//!   passes the remainder through as numbers

pub mod column_transformer;
pub mod encoding;
pub mod error;
pub mod traits;

// Re-export main types
pub use column_transformer::{
    ColumnTransformerBuilder, ColumnTransformerParams, ColumnTransformerStepParams,
    FittedColumnTransformer, FittedColumnTransformerStep, Remainder, StepParams,
};
pub use encoding::{FittedOneHotEncoder, HandleUnknown, OneHotEncoderParams};
pub use error::PreprocessingError;
pub use traits::FittedTransformer;
