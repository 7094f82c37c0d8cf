use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info};

use crate::benchmark::evaluation::{RunRecord, StrategySummary, summarize};
use crate::benchmark::targets::TargetRanges;
use crate::error::{RecipeError, Result};
use crate::models::Ingredient;
use crate::optimizer::{SolverConfig, Strategy, optimize};

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub trials: usize,
    pub seed: u64,
    pub ranges: TargetRanges,
    /// Chance that each catalog ingredient is on hand in a trial. 1.0 uses
    /// the whole catalog every time.
    pub pantry_fraction: f64,
    pub strategies: Vec<Strategy>,
    pub solver: SolverConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            trials: 200,
            seed: 123,
            ranges: TargetRanges::default(),
            pantry_fraction: 0.6,
            strategies: Strategy::ALL.to_vec(),
            solver: SolverConfig::default(),
        }
    }
}

/// Results from a benchmark run.
pub struct BenchmarkResults {
    /// Every solve, in trial then strategy order.
    pub runs: Vec<RunRecord>,
    /// Per-strategy aggregates, best average deviation first.
    pub summaries: Vec<StrategySummary>,
}

/// Draw the ingredients on hand for one trial, keeping catalog order.
fn sample_pantry<'a>(catalog: &'a [Ingredient], fraction: f64, rng: &mut impl Rng) -> Vec<&'a Ingredient> {
    let fraction = fraction.clamp(0.0, 1.0);
    catalog.iter().filter(|_| rng.gen_bool(fraction)).collect()
}

/// Solve seeded random targets with every configured strategy.
///
/// Each trial draws targets and a pantry subset once, then hands the same
/// inputs to all strategies. The stochastic strategy gets a per-trial seed
/// derived from the master seed, so a whole run is reproducible.
pub fn run_benchmark(config: &BenchmarkConfig, catalog: &[Ingredient]) -> Result<BenchmarkResults> {
    if !config.pantry_fraction.is_finite() {
        return Err(RecipeError::InvalidInput(format!(
            "pantry fraction must be a finite number, got {}",
            config.pantry_fraction
        )));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut runs = Vec::with_capacity(config.trials * config.strategies.len());

    info!(
        trials = config.trials,
        catalog = catalog.len(),
        seed = config.seed,
        "benchmark started"
    );

    for trial in 0..config.trials {
        let targets = config.ranges.random(&mut rng);
        let pool = sample_pantry(catalog, config.pantry_fraction, &mut rng);

        let mut solver = config.solver.clone();
        solver.stochastic.seed = Some(rng.next_u64());

        for &strategy in &config.strategies {
            let result = optimize(strategy, &targets, &pool, &solver)?;
            runs.push(RunRecord::new(trial, strategy, &targets, pool.len(), &result));
        }

        debug!(trial, pool = pool.len(), "trial complete");

        // Progress indicator every 10%
        if (trial + 1) % (config.trials / 10).max(1) == 0 {
            let pct = ((trial + 1) as f64 / config.trials as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    let mut summaries = summarize(&runs);
    summaries.sort_by(|a, b| a.cmp_score(b));

    Ok(BenchmarkResults { runs, summaries })
}
