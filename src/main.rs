//! Voltfit - Resistor Network Fitter
//!
//! Finds the best purchasable resistor triple for scaling a bipolar voltage
//! into an ADC's 0-5V input range.
//!
//! # Usage
//!
//! ```bash
//! voltfit                      # built-in catalog, -12V..+12V extremes
//! voltfit --v-lo -5 --v-hi 5   # different input extremes
//! voltfit --catalog parts.txt  # values from a file, one per line
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use voltfit_core::{find_best, Catalog, Report, Result, DEFAULT_V_HI, DEFAULT_V_LO};

/// Resistor network fitter for ADC voltage scaling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Low input voltage extreme, in volts
    #[arg(long, default_value_t = DEFAULT_V_LO, allow_hyphen_values = true)]
    v_lo: f64,

    /// High input voltage extreme, in volts
    #[arg(long, default_value_t = DEFAULT_V_HI, allow_hyphen_values = true)]
    v_hi: f64,

    /// Path to a catalog file (one resistance per line, e.g. "8.2k");
    /// defaults to the built-in E-series catalog
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

fn run(args: &Args) -> Result<Option<Report>> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::e_series(),
    };

    let solution = find_best(&catalog, args.v_lo, args.v_hi)?;
    Ok(solution.map(|s| Report::new(s, args.v_lo, args.v_hi)))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(Some(report)) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!(
                "No safe configuration: every catalog triple leaves [0V, 5V] \
                 for extremes {}V / {}V.",
                args.v_lo, args.v_hi
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("voltfit: {err}");
            ExitCode::FAILURE
        }
    }
}
