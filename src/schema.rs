//! The fixed input schema of the price model.
//!
//! A prediction consumes exactly one labeled row with five text fields.
//! [`CarFeatures`] is the typed form built from the command line; [`InputRow`]
//! is the labeled form the preprocessing pipeline consumes.

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};

/// Column names, in the order the model was fitted on.
pub const COLUMNS: [&str; 5] = ["name", "company", "year", "kms_driven", "fuel_type"];

/// Number of input columns.
pub const N_COLUMNS: usize = COLUMNS.len();

/// One used car, as described by the caller.
///
/// `year` and `kms_driven` stay text here. They are read as numbers by the
/// pipeline, so a malformed value surfaces as a prediction error rather than
/// an argument error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarFeatures {
    /// Vehicle model name, e.g. `Hyundai i20 Sportz`.
    pub name: String,
    /// Manufacturer, e.g. `Hyundai`.
    pub company: String,
    /// Model year.
    pub year: String,
    /// Distance driven in kilometres.
    pub kms_driven: String,
    /// Fuel type, e.g. `Petrol`.
    pub fuel_type: String,
}

impl CarFeatures {
    /// Build from the five fields.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        year: impl Into<String>,
        kms_driven: impl Into<String>,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            year: year.into(),
            kms_driven: kms_driven.into(),
            fuel_type: fuel_type.into(),
        }
    }

    /// Bind positional values in column order.
    ///
    /// Values beyond the fifth are ignored.
    ///
    /// # Errors
    /// [`PredictorError::MissingArguments`] when fewer than five values are given.
    pub fn from_positional<S: AsRef<str>>(values: &[S]) -> Result<Self> {
        match values {
            [name, company, year, kms_driven, fuel_type, ..] => Ok(Self::new(
                name.as_ref(),
                company.as_ref(),
                year.as_ref(),
                kms_driven.as_ref(),
                fuel_type.as_ref(),
            )),
            _ => Err(PredictorError::MissingArguments {
                expected: N_COLUMNS,
                provided: values.len(),
            }),
        }
    }

    /// Field values in column order.
    pub fn values(&self) -> [&str; N_COLUMNS] {
        [
            &self.name,
            &self.company,
            &self.year,
            &self.kms_driven,
            &self.fuel_type,
        ]
    }

    /// The labeled one-row table handed to the pipeline.
    pub fn to_row(&self) -> InputRow {
        InputRow {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            values: self.values().iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// A single labeled row of text cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRow {
    columns: Vec<String>,
    values: Vec<String>,
}

impl InputRow {
    /// Pair column names with values.
    ///
    /// Returns `None` when the two lists differ in length.
    pub fn new(columns: Vec<String>, values: Vec<String>) -> Option<Self> {
        (columns.len() == values.len()).then_some(Self { columns, values })
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cell values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a column position.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Value of a named column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.value(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_positional_binds_in_order() {
        let features =
            CarFeatures::from_positional(&["i20", "Hyundai", "2014", "45000", "Petrol"]).unwrap();
        assert_eq!(features.name, "i20");
        assert_eq!(features.company, "Hyundai");
        assert_eq!(features.year, "2014");
        assert_eq!(features.kms_driven, "45000");
        assert_eq!(features.fuel_type, "Petrol");
    }

    #[test]
    fn test_from_positional_ignores_extra_values() {
        let features = CarFeatures::from_positional(&[
            "i20", "Hyundai", "2014", "45000", "Petrol", "extra", "more",
        ])
        .unwrap();
        assert_eq!(features.fuel_type, "Petrol");
    }

    #[test]
    fn test_from_positional_missing_values() {
        let result = CarFeatures::from_positional(&["i20", "Hyundai", "2014"]);
        assert!(matches!(
            result,
            Err(PredictorError::MissingArguments {
                expected: 5,
                provided: 3
            })
        ));

        let empty: [&str; 0] = [];
        assert!(CarFeatures::from_positional(&empty).is_err());
    }

    #[test]
    fn test_numeric_fields_are_not_validated() {
        let features =
            CarFeatures::from_positional(&["i20", "Hyundai", "two thousand", "-5", "Petrol"])
                .unwrap();
        assert_eq!(features.year, "two thousand");
        assert_eq!(features.kms_driven, "-5");
    }

    #[test]
    fn test_to_row_uses_schema_order() {
        let row = CarFeatures::new("i20", "Hyundai", "2014", "45000", "Petrol").to_row();
        assert_eq!(row.columns(), COLUMNS);
        assert_eq!(row.values(), ["i20", "Hyundai", "2014", "45000", "Petrol"]);
        assert_eq!(row.get("kms_driven"), Some("45000"));
        assert_eq!(row.get("price"), None);
    }

    #[test]
    fn test_input_row_length_check() {
        assert!(InputRow::new(vec!["a".into()], vec![]).is_none());
        let row = InputRow::new(vec!["a".into()], vec!["1".into()]).unwrap();
        assert_eq!(row.len(), 1);
        assert!(!row.is_empty());
        assert_eq!(row.value(0), Some("1"));
        assert_eq!(row.value(1), None);
    }
}
