//! `carprice-predict`: print the predicted price of one used car.
//!
//! ```text
//! carprice-predict <CAR_MODEL> <COMPANY> <YEAR> <KMS_DRIVEN> <FUEL_TYPE>
//! ```
//!
//! Every argument is a value; there are no flags. Prints the price rounded to
//! two decimals on standard output and exits 0. Any failure prints one line
//! on standard error and exits 1.

use std::process::ExitCode;

use carprice::cli::args::PredictArgs;
use carprice::cli::logging;
use carprice::cli::predict;
use carprice::PredictorConfig;

fn main() -> ExitCode {
    logging::init();

    match predict::run(PredictArgs::from_env(), &PredictorConfig::default()) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.diagnostic());
            ExitCode::FAILURE
        }
    }
}
