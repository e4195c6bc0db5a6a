//! Categorical feature encoding transformers.
//!
//! # Available Encoders
//!
//! ## OneHotEncoder
//! Converts string categories to one-hot (dummy) encoding.
//!
//! ```ignore
//! // categories: [["Diesel", "LPG", "Petrol"]]
//! // Input:  ["Petrol"]
//! // Output: [0.0, 0.0, 1.0]
//! ```
//!
//! # Design Notes
//!
//! Categories are kept as the strings they were fitted on, in the order the
//! fitting tool reported them. That order fixes the position of each dummy
//! column and therefore which regression coefficient it meets.

mod one_hot;

pub use one_hot::{FittedOneHotEncoder, OneHotEncoderParams};

/// Strategy for handling unknown categories during transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Raise an error when unknown categories are encountered.
    #[default]
    Error,
    /// Ignore unknown categories (output an all-zero block).
    Ignore,
}
