use tracing::debug;

use crate::cli::args::PredictArgs;
use crate::config::PredictorConfig;
use crate::error::Result;
use crate::pipeline::{CarPricePipeline, Predictor};
use crate::preprocessing::PreprocessingError;
use crate::schema::CarFeatures;

/// Run one prediction and return the line to print.
///
/// The model is loaded before the arguments are inspected, so a missing
/// artifact is reported even when the command line is also wrong.
///
/// # Errors
/// Every [`crate::PredictorError`] is terminal; the caller reports it and exits 1.
pub fn run(args: PredictArgs, config: &PredictorConfig) -> Result<String> {
    let pipeline = CarPricePipeline::load(config)?;

    debug!(provided = args.provided(), "parsed arguments");
    let features = args.into_features()?;

    predict_line(&pipeline, &features, config.decimals())
}

/// Predict and render the result as it is printed.
pub fn predict_line<P: Predictor>(
    predictor: &P,
    features: &CarFeatures,
    decimals: u32,
) -> Result<String> {
    let price = predictor.predict(features)?;
    format_prediction(price, decimals)
}

/// Round half to even at `decimals` places.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

/// Render a rounded prediction: shortest round-trip decimal, always with a
/// fractional part.
///
/// ```
/// use carprice::cli::predict::format_prediction;
///
/// assert_eq!(format_prediction(452154.3676, 2).unwrap(), "452154.37");
/// assert_eq!(format_prediction(452154.001, 2).unwrap(), "452154.0");
/// ```
///
/// # Errors
/// A NaN or infinite value is a prediction error.
pub fn format_prediction(value: f64, decimals: u32) -> Result<String> {
    let rounded = round_half_even(value, decimals);
    if !rounded.is_finite() {
        return Err(PreprocessingError::NonFinite(format!("prediction = {value}")).into());
    }
    let mut text = rounded.to_string();
    if !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictorError;
    use crate::model::{LinearModel, LinearParams};
    use crate::preprocessing::{ColumnTransformerBuilder, FittedOneHotEncoder, Remainder};
    use crate::schema::COLUMNS;
    use ndarray::array;

    struct FixedPrice(f64);

    impl Predictor for FixedPrice {
        fn predict(&self, _features: &CarFeatures) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct Rejecting;

    impl Predictor for Rejecting {
        fn predict(&self, features: &CarFeatures) -> Result<f64> {
            Err(PreprocessingError::UnknownCategory {
                column: 0,
                value: features.name.clone(),
            }
            .into())
        }
    }

    fn saved_pipeline() -> CarPricePipeline {
        let encoder = FittedOneHotEncoder::new(vec![
            vec!["Swift".into(), "i20".into()],
            vec!["Hyundai".into(), "Maruti".into()],
            vec!["Diesel".into(), "Petrol".into()],
        ])
        .unwrap();
        let preprocessor = ColumnTransformerBuilder::new(COLUMNS)
            .add_one_hot_encoder("onehotencoder", ["name", "company", "fuel_type"], encoder)
            .remainder(Remainder::Passthrough)
            .build()
            .unwrap();
        let regressor = LinearModel::new(LinearParams {
            weights: array![1000.0, 2500.0, 500.0, -300.0, 1200.0, 800.0, 15000.0, -0.75],
            bias: -30_000_000.0,
        });
        CarPricePipeline::new(preprocessor, regressor).unwrap()
    }

    fn i20() -> CarFeatures {
        CarFeatures::new("i20", "Hyundai", "2014", "45000", "Petrol")
    }

    #[test]
    fn test_rounding_examples() {
        assert_eq!(format_prediction(452154.3676, 2).unwrap(), "452154.37");
        assert_eq!(format_prediction(452154.001, 2).unwrap(), "452154.0");
        assert_eq!(format_prediction(180049.874, 2).unwrap(), "180049.87");
        assert_eq!(format_prediction(-0.004, 2).unwrap(), "-0.0");
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(0.375, 2), 0.38);
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
    }

    #[test]
    fn test_format_whole_and_negative() {
        assert_eq!(format_prediction(180_050.0, 2).unwrap(), "180050.0");
        assert_eq!(format_prediction(-1234.5, 2).unwrap(), "-1234.5");
        assert_eq!(format_prediction(7.0, 0).unwrap(), "7.0");
    }

    #[test]
    fn test_format_non_finite() {
        let err = format_prediction(f64::NAN, 2).unwrap_err();
        assert!(matches!(err, PredictorError::Prediction(_)));
        assert!(format_prediction(f64::INFINITY, 2).is_err());
    }

    #[test]
    fn test_predict_line() {
        let line = predict_line(&FixedPrice(452154.3676), &i20(), 2).unwrap();
        assert_eq!(line, "452154.37");
    }

    #[test]
    fn test_predict_line_error() {
        let err = predict_line(&Rejecting, &i20(), 2).unwrap_err();
        assert_eq!(
            err.diagnostic(),
            "Error during prediction: Found unknown categories ['i20'] in column 0 during transform"
        );
    }

    #[test]
    fn test_missing_model_reported_first() {
        let config = PredictorConfig::new().with_model_path("/nonexistent/model.bin");
        for args in [vec!["i20"], vec!["--help"], vec!["--version"]] {
            assert!(matches!(
                run(PredictArgs::from_values(args), &config),
                Err(PredictorError::ModelNotFound { .. })
            ));
        }
    }

    #[test]
    fn test_run_with_saved_model() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("LinearRegressionModel.bin");
        saved_pipeline().save_to_file(&path).unwrap();
        let config = PredictorConfig::new().with_model_path(&path);

        let line = run(
            PredictArgs::from_values(["i20", "Hyundai", "2014", "45000", "Petrol"]),
            &config,
        )
        .unwrap();
        assert_eq!(line, "180050.0");

        let err = run(
            PredictArgs::from_values(["--version", "Hyundai", "2014", "45000", "Petrol"]),
            &config,
        )
        .unwrap_err();
        assert!(err.diagnostic().starts_with("Error during prediction:"));
    }
}
