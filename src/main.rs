use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use pate_apriori::config::{CliOverrides, PateConfig};
use pate_apriori::convert::{self, SourceFormat};
use pate_apriori::errors::{PateError, PateErrorCode};
use pate_apriori::{dataset, report, Apriori, ItemSetMiner};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "pate",
    about = "Frequent itemset mining with Apriori",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    mine: MineArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mine frequent itemsets (the default when no subcommand is given).
    Mine(MineArgs),

    /// Convert a raw benchmark dataset into one transaction per line.
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct MineArgs {
    /// Transaction file: one transaction per line, whitespace-separated items.
    /// Mines a built-in market-basket example when omitted.
    dataset: Option<PathBuf>,

    /// Minimum support in [0, 1] (default 0.4)
    #[arg(long)]
    min_support: Option<f64>,

    /// Directory for the CSV tables (default `results`)
    #[arg(long)]
    results_dir: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip writing CSV tables
    #[arg(long)]
    no_csv: bool,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Raw dataset file
    input: PathBuf,

    /// Layout of the raw dataset
    #[arg(long = "type", value_enum)]
    format: SourceFormat,

    /// Output file (default `<input stem>_processed.txt` beside the input)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the first N converted rows to `<output stem>_sample.txt`
    #[arg(long)]
    sample: Option<usize>,
}

fn main() -> ExitCode {
    pate_apriori::tracing::init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Mine(args)) => run(args),
        None => run(cli.mine),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), "{e}");
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn run_convert(args: ConvertArgs) -> Result<(), PateError> {
    let files = convert::convert_file(
        args.format,
        &args.input,
        args.output.as_deref(),
        args.sample,
    )?;

    println!(
        "Converted {} rows from {} to {}",
        files.rows,
        args.input.display(),
        files.output.display()
    );
    if let Some(sample) = &files.sample {
        println!("Sample saved to {}", sample.display());
    }
    Ok(())
}

fn run(cli: MineArgs) -> Result<(), PateError> {
    let start = Instant::now();

    let overrides = CliOverrides {
        min_support: cli.min_support,
        results_dir: cli.results_dir,
        no_csv: cli.no_csv,
    };
    let config = PateConfig::load(cli.config.as_deref(), Some(&overrides))?;

    let (transactions, data_load) = match &cli.dataset {
        Some(path) => {
            let load_start = Instant::now();
            let transactions = dataset::load_dataset(path)?;
            println!("Running Apriori on dataset from {}", path.display());
            (transactions, load_start.elapsed())
        }
        None => {
            println!("Running Apriori on example dataset");
            (dataset::example_dataset(), Duration::ZERO)
        }
    };

    let processing_start = Instant::now();
    let mut miner = Apriori::new(transactions, config.mining.effective_min_support())?;
    miner.mine();
    let processing = processing_start.elapsed();

    println!();
    print!("{}", report::render_console(&miner));

    let metrics = report::TimingMetrics {
        data_load,
        processing,
        total: start.elapsed(),
    };

    if config.output.effective_write_csv() {
        let basename = dataset::output_basename(cli.dataset.as_deref());
        let results_dir = config.output.effective_results_dir();
        match report::write_csv_reports(&miner, &results_dir, &basename, &metrics) {
            Ok(files) => {
                info!(summary = %files.summary.display(), "reports written");
                println!(
                    "\nResults have been written to CSV files in the '{}' directory.",
                    results_dir.display()
                );
            }
            // Results are already computed; a write failure does not fail the run.
            Err(e) => error!(code = e.error_code(), "Error writing results to CSV: {e}"),
        }
    }

    println!();
    print!("{}", report::render_timing(&metrics));
    Ok(())
}
