use std::time::Instant;

use tracing::debug;

use crate::models::{Ingredient, MacroTargets, OptimizationResult};
use crate::optimizer::constants::{
    BASELINE_CARB_GRAMS, BASELINE_FAT_GRAMS, BASELINE_PROTEIN_GRAMS, VEGETABLE_GRAMS,
};
use crate::optimizer::pool::{IngredientPool, Selection};
use crate::optimizer::{elapsed_ms, finish, push_entry};

/// Baseline ("Greedy") solver.
///
/// First ingredient of each category at fixed quantities. Targets only feed
/// the reported macros and deviation, never the assignment.
pub fn solve_baseline<'a>(
    targets: &MacroTargets,
    available: &[&'a Ingredient],
) -> OptimizationResult<'a> {
    let start = Instant::now();
    let pool = IngredientPool::partition(available);

    let Some(selection) = Selection::first_available(&pool) else {
        debug!(pool_size = available.len(), "baseline: infeasible pool");
        return OptimizationResult::infeasible(elapsed_ms(start));
    };

    let mut ingredients = Vec::with_capacity(4);
    push_entry(&mut ingredients, selection.protein, BASELINE_PROTEIN_GRAMS);
    push_entry(&mut ingredients, selection.carb, BASELINE_CARB_GRAMS);
    if let Some(vegetable) = selection.vegetable {
        push_entry(&mut ingredients, vegetable, VEGETABLE_GRAMS);
    }
    if let Some(fat) = selection.fat {
        push_entry(&mut ingredients, fat, BASELINE_FAT_GRAMS);
    }

    finish(ingredients, targets, start)
}
