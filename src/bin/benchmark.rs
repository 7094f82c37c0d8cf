use std::path::PathBuf;

use clap::Parser;

use macro_recipe::benchmark::{
    BenchmarkConfig, print_summary, run_benchmark, write_runs_csv, write_summary_json,
};
use macro_recipe::logging::init_logging;
use macro_recipe::pantry::load_catalog;

#[derive(Parser, Debug)]
#[command(name = "benchmark")]
#[command(about = "Compare the recipe strategies on seeded random targets")]
struct Args {
    /// Number of random target sets
    #[arg(long, default_value = "200")]
    trials: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Path to the ingredient catalog
    #[arg(long, default_value = "data/ingredients.json")]
    catalog: PathBuf,

    /// Chance that each ingredient is on hand in a trial
    #[arg(long, default_value = "0.6")]
    fraction: f64,

    /// Output CSV file for every run
    #[arg(long, default_value = "benchmark_runs.csv")]
    csv: PathBuf,

    /// Output JSON file for the per-strategy summary
    #[arg(long, default_value = "benchmark_summary.json")]
    json: PathBuf,
}

fn main() {
    let args = Args::parse();
    init_logging("warn");

    let catalog = match load_catalog(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog {:?}: {}", args.catalog, e);
            std::process::exit(1);
        }
    };

    println!("Loaded {} ingredients from {:?}", catalog.len(), args.catalog);

    let config = BenchmarkConfig {
        trials: args.trials,
        seed: args.seed,
        pantry_fraction: args.fraction,
        ..Default::default()
    };

    let results = match run_benchmark(&config, &catalog) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_summary(&results.summaries);

    if let Err(e) = write_runs_csv(&results.runs, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote {} runs to {:?}", results.runs.len(), args.csv);
    }

    if let Err(e) = write_summary_json(&results.summaries, config.trials, config.seed, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
