//! Compound Interest CLI
//!
//! Runs daily projections and two-tier calculations, printing JSON to stdout

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use compound_interest::{
    calculate_sofipo_compound_interest, project_compound_interest, DayCountBasis, ProjectionInput,
    ScenarioRunner, SofipoCompoundInput, SofipoProduct,
};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "compound-interest",
    version,
    about = "Daily compounding and two-tier interest calculations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a principal day by day at an annual rate
    Project {
        /// Annual rate as a decimal (0.15 for 15%)
        #[arg(long, allow_negative_numbers = true)]
        annual_rate: f64,

        #[arg(long, allow_negative_numbers = true)]
        days: i64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        principal: f64,

        /// Days per year: 360 or 365
        #[arg(long, default_value_t = 360)]
        basis: u32,

        /// Print only the final balance and interest
        #[arg(long)]
        summary: bool,
    },

    /// Two-tier SOFIPO calculation for one investment
    Sofipo {
        #[arg(long, allow_negative_numbers = true)]
        total: f64,

        #[arg(long, allow_negative_numbers = true)]
        days: i64,

        /// JSON file with limitBlockA, rateA and rateB
        #[arg(long)]
        product: Option<PathBuf>,

        #[arg(long, allow_negative_numbers = true)]
        limit_block_a: Option<f64>,

        /// Annual percentage for block A
        #[arg(long, allow_negative_numbers = true)]
        rate_a: Option<f64>,

        /// Annual percentage for block B
        #[arg(long, allow_negative_numbers = true)]
        rate_b: Option<f64>,
    },

    /// Evaluate a JSON array of two-tier inputs
    Batch {
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
enum BatchRow<T> {
    Ok(T),
    Err { error: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Project { annual_rate, days, principal, basis, summary } => {
            let basis = DayCountBasis::try_from(basis).map_err(anyhow::Error::msg)?;
            let input = ProjectionInput::new(principal, annual_rate, days).with_basis(basis);
            let series = project_compound_interest(&input)?;

            if summary {
                print_json(&series.summary())
            } else {
                print_json(&series)
            }
        }
        Command::Sofipo { total, days, product, limit_block_a, rate_a, rate_b } => {
            let base = match product {
                Some(path) => SofipoProduct::from_json_path(path)?,
                None => SofipoProduct::from_env(),
            };
            let product = SofipoProduct {
                limit_block_a: limit_block_a.unwrap_or(base.limit_block_a),
                rate_a: rate_a.unwrap_or(base.rate_a),
                rate_b: rate_b.unwrap_or(base.rate_b),
            };

            let output = calculate_sofipo_compound_interest(&product.input(total, days))?;
            print_json(&output)
        }
        Command::Batch { input } => {
            let file = File::open(&input)
                .with_context(|| format!("Failed to open batch file {}", input.display()))?;
            let inputs: Vec<SofipoCompoundInput> = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse batch file {}", input.display()))?;

            let rows: Vec<_> = ScenarioRunner::new()
                .run_batch(&inputs)
                .into_iter()
                .map(|result| match result {
                    Ok(output) => BatchRow::Ok(output),
                    Err(e) => BatchRow::Err { error: e.to_string() },
                })
                .collect();
            print_json(&rows)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Cli::parse())
}
