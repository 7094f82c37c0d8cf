pub mod baseline;
pub mod calculations;
pub mod constants;
pub mod continuous;
pub mod pool;
pub mod quantized;
pub mod stochastic;
pub mod strategy;

use std::time::Instant;

use crate::models::{Ingredient, IngredientQuantity, MacroTargets, OptimizationResult, Solution};

pub use baseline::solve_baseline;
pub use calculations::{
    MacroErrors, MatchQuality, calculate_macros, deviation, fitness, solution_deviation,
};
pub use constants::*;
pub use continuous::solve_continuous;
pub use pool::{IngredientPool, Selection};
pub use quantized::solve_quantized;
pub use stochastic::{GeneticSearch, StochasticConfig, solve_stochastic, solve_stochastic_with_rng};
pub use strategy::{SolverConfig, Strategy, optimize};

/// Milliseconds since `start`.
pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Append an entry, omitting it when no quantity was allocated.
pub(crate) fn push_entry<'a>(
    solution: &mut Solution<'a>,
    ingredient: &'a Ingredient,
    quantity: f64,
) {
    if quantity > 0.0 {
        solution.push(IngredientQuantity::new(ingredient, quantity));
    }
}

/// Wrap a finished assignment into a feasible result.
pub(crate) fn finish<'a>(
    ingredients: Solution<'a>,
    targets: &MacroTargets,
    start: Instant,
) -> OptimizationResult<'a> {
    let macros = calculate_macros(&ingredients);
    let objective_value = deviation(&macros, targets);
    OptimizationResult {
        ingredients,
        macros,
        solve_time_ms: elapsed_ms(start),
        feasible: true,
        objective_value,
    }
}
