//! # carprice
//!
//! Used-car price prediction from a pre-fitted preprocessing + linear
//! regression pipeline.
//!
//! ## Core Design Principles
//!
//! - **Inference only**: the pipeline is fitted elsewhere and arrives as one
//!   artifact. Nothing here trains or refits.
//! - **Plain parameters on disk**: fitted components serialize to plain
//!   parameter structs (categories, coefficients) and rebuild their lookup
//!   tables on load.
//! - **Narrow seam**: callers predict through the [`Predictor`] trait and never
//!   see the artifact format.
//!
//! ## Quick Start
//!
//! ```rust
//! use carprice::model::{LinearModel, LinearParams};
//! use carprice::preprocessing::{ColumnTransformerBuilder, FittedOneHotEncoder, Remainder};
//! use carprice::schema::COLUMNS;
//! use carprice::{CarFeatures, CarPricePipeline, Predictor};
//! use ndarray::array;
//!
//! let encoder = FittedOneHotEncoder::new(vec![
//!     vec!["Swift".into(), "i20".into()],
//!     vec!["Hyundai".into(), "Maruti".into()],
//!     vec!["Diesel".into(), "Petrol".into()],
//! ])?;
//! let preprocessor = ColumnTransformerBuilder::new(COLUMNS)
//!     .add_one_hot_encoder("onehotencoder", ["name", "company", "fuel_type"], encoder)
//!     .remainder(Remainder::Passthrough)
//!     .build()?;
//! let regressor = LinearModel::new(LinearParams {
//!     weights: array![1000.0, 2500.0, 500.0, -300.0, 1200.0, 800.0, 15000.0, -0.75],
//!     bias: -30_000_000.0,
//! });
//! let pipeline = CarPricePipeline::new(preprocessor, regressor)?;
//!
//! let car = CarFeatures::new("i20", "Hyundai", "2014", "45000", "Petrol");
//! assert_eq!(pipeline.predict(&car)?, 180_050.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Structure
//!
//! - `schema`: The five input columns and the row built from them
//! - `preprocessing`: Fitted one-hot encoder and column transformer
//! - `model`: Fitted linear regressor
//! - `pipeline`: Preprocessor + regressor loaded from one artifact
//! - `serialization`: Byte and JSON encodings of fitted parameters
//! - `config`: Artifact location and output precision
//! - `cli`: Argument parsing, logging and output for the binaries

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod preprocessing;
pub mod schema;
pub mod serialization;

pub use config::PredictorConfig;
pub use error::{PredictorError, Result};
pub use pipeline::{CarPricePipeline, PipelineParams, Predictor};
pub use schema::CarFeatures;
