use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{RecipeError, Result};
use crate::models::{Ingredient, MacroTargets, OptimizationResult};
use crate::optimizer::baseline::solve_baseline;
use crate::optimizer::continuous::solve_continuous;
use crate::optimizer::quantized::solve_quantized;
use crate::optimizer::stochastic::{StochasticConfig, solve_stochastic};

/// The quantity-optimization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Closed-form sizing of the densest ingredients ("LP").
    Continuous,
    /// Continuous sizing rounded to 50g portions ("MILP").
    Quantized,
    /// Population search ("Genetic").
    Stochastic,
    /// Fixed quantities of the first ingredients ("Greedy").
    Baseline,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Continuous,
        Strategy::Quantized,
        Strategy::Stochastic,
        Strategy::Baseline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Continuous => "continuous",
            Strategy::Quantized => "quantized",
            Strategy::Stochastic => "stochastic",
            Strategy::Baseline => "baseline",
        }
    }

    /// Short label used in tables.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Continuous => "LP",
            Strategy::Quantized => "MILP",
            Strategy::Stochastic => "Genetic",
            Strategy::Baseline => "Greedy",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = RecipeError;

    /// Accepts the strategy names and their short labels, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "continuous" | "lp" => Ok(Strategy::Continuous),
            "quantized" | "milp" => Ok(Strategy::Quantized),
            "stochastic" | "genetic" => Ok(Strategy::Stochastic),
            "baseline" | "greedy" => Ok(Strategy::Baseline),
            _ => Err(RecipeError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Settings shared by every solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub stochastic: StochasticConfig,
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        self.stochastic.validate()
    }
}

/// Validate inputs and run one strategy.
///
/// An infeasible pool is not an error: it comes back as a result with
/// `feasible == false`.
pub fn optimize<'a>(
    strategy: Strategy,
    targets: &MacroTargets,
    available: &[&'a Ingredient],
    config: &SolverConfig,
) -> Result<OptimizationResult<'a>> {
    targets.validate()?;
    config.validate()?;

    let result = match strategy {
        Strategy::Continuous => solve_continuous(targets, available),
        Strategy::Quantized => solve_quantized(targets, available),
        Strategy::Stochastic => solve_stochastic(targets, available, &config.stochastic),
        Strategy::Baseline => solve_baseline(targets, available),
    };

    info!(
        strategy = strategy.name(),
        feasible = result.feasible,
        objective = result.objective_value,
        solve_time_ms = result.solve_time_ms,
        "solved"
    );

    Ok(result)
}
