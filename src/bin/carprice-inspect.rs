//! `carprice-inspect`: list the categories a price model accepts.
//!
//! Prints JSON with `companies`, `car_models`, `years` and `fuel_types`,
//! taken from the model's encoders or, with `--data`, from a cleaned CSV.
//! `--schema` prints the model's input columns and encoded features instead.

use std::process::ExitCode;

use clap::Parser;

use carprice::cli::args::InspectArgs;
use carprice::cli::{inspect, logging};
use carprice::PredictorConfig;

fn main() -> ExitCode {
    logging::init();

    let args = InspectArgs::parse();
    match inspect::run(&args, &PredictorConfig::default()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.diagnostic());
            ExitCode::FAILURE
        }
    }
}
