//! Category listings and schema reports for `carprice-inspect`.
//!
//! The listing has the shape the price form consumes: every company, car
//! model, year and fuel type a user can pick.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::args::InspectArgs;
use crate::config::PredictorConfig;
use crate::error::Result;
use crate::pipeline::CarPricePipeline;
use crate::preprocessing::{FittedTransformer, Remainder};

/// Selectable values for each input field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub companies: Vec<String>,
    pub car_models: Vec<String>,
    /// Newest first.
    pub years: Vec<String>,
    /// In first-seen order.
    pub fuel_types: Vec<String>,
}

/// Input columns and encoded features of a loaded model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaReport {
    pub feature_names_in: Vec<String>,
    pub n_features_out: usize,
    pub feature_names_out: Vec<String>,
    pub remainder: Remainder,
    pub n_coefficients: usize,
    pub intercept: f64,
}

/// One row of the cleaned car dataset. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct CarRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    fuel_type: String,
}

/// Category lists recorded in the model's encoders, sorted.
///
/// Years are numeric in the model and therefore not listed.
pub fn catalog_from_pipeline(pipeline: &CarPricePipeline) -> Catalog {
    let mut catalog = Catalog::default();
    for (column, categories) in pipeline.preprocessor().one_hot_categories() {
        let target = match column {
            "name" => &mut catalog.car_models,
            "company" => &mut catalog.companies,
            "fuel_type" => &mut catalog.fuel_types,
            _ => continue,
        };
        target.extend(categories.iter().cloned());
    }
    catalog.companies.sort();
    catalog.car_models.sort();
    catalog.fuel_types.sort();
    catalog
}

/// Distinct values found in a cleaned-data CSV with a header row.
///
/// Empty cells are skipped. Companies and car models are sorted, years run
/// newest first, fuel types keep their first-seen order.
pub fn catalog_from_csv<R: Read>(reader: R) -> Result<Catalog> {
    let mut companies = BTreeSet::new();
    let mut car_models = BTreeSet::new();
    let mut years: Vec<String> = Vec::new();
    let mut fuel_types: Vec<String> = Vec::new();
    let mut rows = 0usize;

    let mut csv_reader = csv::Reader::from_reader(reader);
    for record in csv_reader.deserialize() {
        let record: CarRecord = record?;
        rows += 1;
        if !record.company.is_empty() {
            companies.insert(record.company);
        }
        if !record.name.is_empty() {
            car_models.insert(record.name);
        }
        if !record.year.is_empty() && !years.contains(&record.year) {
            years.push(record.year);
        }
        if !record.fuel_type.is_empty() && !fuel_types.contains(&record.fuel_type) {
            fuel_types.push(record.fuel_type);
        }
    }
    debug!(rows, "read cleaned data");

    years.sort_by(|a, b| newest_first(a, b));

    Ok(Catalog {
        companies: companies.into_iter().collect(),
        car_models: car_models.into_iter().collect(),
        years,
        fuel_types,
    })
}

/// Numeric years descending; anything unparseable goes last, in text order.
fn newest_first(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => y.total_cmp(&x),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Describe what a loaded model consumes and produces.
pub fn schema_report(pipeline: &CarPricePipeline) -> SchemaReport {
    let preprocessor = pipeline.preprocessor();
    let regressor = pipeline.regressor().params();
    SchemaReport {
        feature_names_in: preprocessor.feature_names_in().to_vec(),
        n_features_out: preprocessor.n_features_out(),
        feature_names_out: preprocessor.feature_names_out(),
        remainder: preprocessor.remainder(),
        n_coefficients: regressor.weights.len(),
        intercept: regressor.bias,
    }
}

/// Load a binary artifact, or JSON parameters when the path ends in `.json`.
pub fn load_model(path: &Path) -> Result<CarPricePipeline> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        CarPricePipeline::load_json(path)
    } else {
        CarPricePipeline::load_from_file(path)
    }
}

/// Run `carprice-inspect` and return the JSON document to print.
pub fn run(args: &InspectArgs, config: &PredictorConfig) -> Result<String> {
    if let Some(data) = &args.data {
        info!(path = %data.display(), "collecting categories from data");
        let file = std::fs::File::open(data)?;
        let catalog = catalog_from_csv(file)?;
        return Ok(serde_json::to_string_pretty(&catalog)?);
    }

    let path = match &args.model {
        Some(path) => path.clone(),
        None => config.resolve_model_path()?,
    };
    let pipeline = load_model(&path)?;

    if args.schema {
        Ok(serde_json::to_string_pretty(&schema_report(&pipeline))?)
    } else {
        Ok(serde_json::to_string_pretty(&catalog_from_pipeline(&pipeline))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearModel, LinearParams};
    use crate::preprocessing::{ColumnTransformerBuilder, FittedOneHotEncoder};
    use crate::schema::COLUMNS;
    use ndarray::Array1;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn pipeline() -> CarPricePipeline {
        let encoder = FittedOneHotEncoder::new(vec![
            strings(&["i20", "Alto"]),
            strings(&["Maruti", "Hyundai"]),
            strings(&["Petrol", "Diesel", "LPG"]),
        ])
        .unwrap();
        let preprocessor = ColumnTransformerBuilder::new(COLUMNS)
            .add_one_hot_encoder("onehotencoder", ["name", "company", "fuel_type"], encoder)
            .remainder(Remainder::Passthrough)
            .build()
            .unwrap();
        let regressor = LinearModel::new(LinearParams {
            weights: Array1::zeros(9),
            bias: 1.5,
        });
        CarPricePipeline::new(preprocessor, regressor).unwrap()
    }

    #[test]
    fn test_catalog_from_pipeline() {
        let catalog = catalog_from_pipeline(&pipeline());
        assert_eq!(catalog.companies, strings(&["Hyundai", "Maruti"]));
        assert_eq!(catalog.car_models, strings(&["Alto", "i20"]));
        assert_eq!(catalog.fuel_types, strings(&["Diesel", "LPG", "Petrol"]));
        assert!(catalog.years.is_empty());
    }

    #[test]
    fn test_catalog_from_csv() {
        let data = "\
,name,company,year,Price,kms_driven,fuel_type
0,Hyundai Santro Xing,Hyundai,2007,80000,45000,Petrol
1,Mahindra Jeep CL550,Mahindra,2006,425000,40,Diesel
2,Hyundai Grand i10,Hyundai,2014,325000,28000,Petrol
3,Ford EcoSport Titanium,Ford,2014,575000,36000,Diesel
4,Maruti Suzuki Swift,Maruti,,399999,0,LPG
";
        let catalog = catalog_from_csv(data.as_bytes()).unwrap();
        assert_eq!(
            catalog.companies,
            strings(&["Ford", "Hyundai", "Mahindra", "Maruti"])
        );
        assert_eq!(catalog.car_models.len(), 5);
        assert_eq!(catalog.car_models[0], "Ford EcoSport Titanium");
        assert_eq!(catalog.years, strings(&["2014", "2007", "2006"]));
        assert_eq!(catalog.fuel_types, strings(&["Petrol", "Diesel", "LPG"]));
    }

    #[test]
    fn test_years_sort_numerically() {
        let data = "name,company,year,fuel_type\na,b,999,x\na,b,2010,x\na,b,unknown,x\na,b,2019,x\n";
        let catalog = catalog_from_csv(data.as_bytes()).unwrap();
        assert_eq!(catalog.years, strings(&["2019", "2010", "999", "unknown"]));
    }

    #[test]
    fn test_catalog_csv_ragged_rows_fail() {
        let data = "name,company,year,fuel_type\na,b,2010\n";
        assert!(matches!(
            catalog_from_csv(data.as_bytes()),
            Err(crate::PredictorError::Data(_))
        ));
    }

    #[test]
    fn test_schema_report() {
        let report = schema_report(&pipeline());
        assert_eq!(report.feature_names_in, strings(&COLUMNS));
        assert_eq!(report.n_features_out, 9);
        assert_eq!(report.n_coefficients, 9);
        assert_eq!(report.feature_names_out[0], "name_i20");
        assert_eq!(report.feature_names_out[8], "kms_driven");
        assert_eq!(report.remainder, Remainder::Passthrough);
    }

    #[test]
    fn test_run_with_model_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("model.json");
        pipeline().save_json(&path).unwrap();

        let args = InspectArgs {
            model: Some(path),
            data: None,
            schema: false,
        };
        let out = run(&args, &PredictorConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["companies"][0], "Hyundai");
        assert_eq!(value["years"].as_array().map(Vec::len), Some(0));
    }
}
