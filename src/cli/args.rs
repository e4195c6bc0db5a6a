use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::error::Result;
use crate::schema::{CarFeatures, N_COLUMNS};

/// Arguments of `carprice-predict`.
///
/// The command line is five free-text values and nothing else. There are no
/// flags and no `--` separator: every token, including `--help` or
/// `-Sportz`, is a value and reaches the model unchanged. Values are
/// collected without a count check so that a short command line is reported
/// as missing arguments after the model is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictArgs {
    /// `CAR_MODEL COMPANY YEAR KMS_DRIVEN FUEL_TYPE`, then anything ignored.
    pub values: Vec<OsString>,
}

impl PredictArgs {
    /// Arguments of the running process, program name excluded.
    pub fn from_env() -> Self {
        Self::from_values(std::env::args_os().skip(1))
    }

    /// Collect values as given, program name excluded.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of positional values supplied, extras included.
    pub fn provided(&self) -> usize {
        self.values.len()
    }

    /// Bind the positionals to a [`CarFeatures`] row.
    ///
    /// Values that are not valid UTF-8 are converted lossily.
    ///
    /// # Errors
    /// [`crate::PredictorError::MissingArguments`] when fewer than five values were given.
    pub fn into_features(self) -> Result<CarFeatures> {
        let values: Vec<String> = self
            .values
            .iter()
            .map(|v| v.to_string_lossy().into_owned())
            .collect();
        if values.len() > N_COLUMNS {
            debug!(ignored = ?&values[N_COLUMNS..], "ignoring extra arguments");
        }
        CarFeatures::from_positional(&values)
    }
}

/// Arguments of `carprice-inspect`.
#[derive(Parser, Debug)]
#[command(name = "carprice-inspect", version, long_about = None)]
#[command(about = "List the categories a price model knows, or its input schema")]
pub struct InspectArgs {
    /// Model artifact (.bin, or .json parameters)
    /// [default: LinearRegressionModel.bin above the executable's directory]
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Collect categories from a cleaned-data CSV instead of the model
    #[arg(short, long, conflicts_with = "schema")]
    pub data: Option<PathBuf>,

    /// Print the model's input columns and encoded features
    #[arg(long, default_value_t = false)]
    pub schema: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PredictorError;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        InspectArgs::command().debug_assert();
    }

    fn parse(args: &[&str]) -> PredictArgs {
        PredictArgs::from_values(args.iter().copied())
    }

    #[test]
    fn test_five_positionals() {
        let args = parse(&["Hyundai i20 Sportz", "Hyundai", "2014", "45000", "Petrol"]);
        assert_eq!(args.provided(), 5);
        let features = args.into_features().unwrap();
        assert_eq!(features.name, "Hyundai i20 Sportz");
        assert_eq!(features.fuel_type, "Petrol");
    }

    #[test]
    fn test_too_few_positionals() {
        let args = parse(&["i20", "Hyundai", "2014"]);
        assert_eq!(args.provided(), 3);
        assert!(matches!(
            args.into_features(),
            Err(PredictorError::MissingArguments {
                expected: 5,
                provided: 3
            })
        ));
    }

    #[test]
    fn test_no_positionals() {
        let args = parse(&[]);
        assert_eq!(args.provided(), 0);
        assert!(args.into_features().is_err());
    }

    #[test]
    fn test_extra_positionals_ignored() {
        let args = parse(&[
            "i20",
            "Hyundai",
            "2014",
            "45000",
            "Petrol",
            "Manual",
            "--owner=first",
        ]);
        assert_eq!(args.provided(), 7);
        assert_eq!(args.into_features().unwrap().kms_driven, "45000");
    }

    #[test]
    fn test_negative_numbers_are_values() {
        let args = parse(&["i20", "Hyundai", "2014", "-5", "Petrol"]);
        assert_eq!(args.into_features().unwrap().kms_driven, "-5");
    }

    #[test]
    fn test_flag_like_values_are_values() {
        for first in ["--help", "-h", "--version", "-V", "-Sportz", "--bogus", "--"] {
            let args = parse(&[first, "Hyundai", "2014", "45000", "Petrol"]);
            let features = args.into_features().unwrap();
            assert_eq!(features.name, first);
            assert_eq!(features.company, "Hyundai");
        }

        let args = parse(&["i20", "-V", "2014", "--help", "-h"]);
        let features = args.into_features().unwrap();
        assert_eq!(features.company, "-V");
        assert_eq!(features.kms_driven, "--help");
        assert_eq!(features.fuel_type, "-h");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_values_are_kept() {
        use std::os::unix::ffi::OsStringExt;

        let args = PredictArgs::from_values([
            OsString::from_vec(b"i2\xff".to_vec()),
            "Hyundai".into(),
            "2014".into(),
            "45000".into(),
            "Petrol".into(),
        ]);
        assert_eq!(args.into_features().unwrap().name, "i2\u{fffd}");
    }

    #[test]
    fn test_lone_flag_is_a_short_command_line() {
        let args = parse(&["--version"]);
        assert!(matches!(
            args.into_features(),
            Err(PredictorError::MissingArguments { provided: 1, .. })
        ));
    }

    #[test]
    fn test_inspect_flags() {
        let args = InspectArgs::try_parse_from([
            "carprice-inspect",
            "--model",
            "/tmp/model.bin",
            "--schema",
        ])
        .unwrap();
        assert_eq!(args.model, Some(PathBuf::from("/tmp/model.bin")));
        assert!(args.schema);
        assert!(args.data.is_none());

        assert!(InspectArgs::try_parse_from([
            "carprice-inspect",
            "--data",
            "cars.csv",
            "--schema"
        ])
        .is_err());
    }
}
