use std::time::Instant;

use tracing::debug;

use crate::models::{Ingredient, MacroTargets, OptimizationResult};
use crate::optimizer::constants::{MIN_PORTIONS, PORTION_SIZE, VEGETABLE_PORTIONS};
use crate::optimizer::pool::{IngredientPool, Selection};
use crate::optimizer::{elapsed_ms, finish, push_entry};

/// Whole portions closest to `target` at `density` per 100g, at least one.
pub fn portions_for(target: f64, density: f64) -> f64 {
    if density <= 0.0 {
        return MIN_PORTIONS;
    }
    (target * 100.0 / (density * PORTION_SIZE))
        .round()
        .max(MIN_PORTIONS)
}

/// Quantized ("MILP") solver.
///
/// Same picks as the continuous solver, but every quantity is a whole number
/// of 50g portions.
pub fn solve_quantized<'a>(
    targets: &MacroTargets,
    available: &[&'a Ingredient],
) -> OptimizationResult<'a> {
    let start = Instant::now();
    let pool = IngredientPool::partition(available);

    let Some(selection) = Selection::densest(&pool) else {
        debug!(pool_size = available.len(), "quantized: infeasible pool");
        return OptimizationResult::infeasible(elapsed_ms(start));
    };

    let protein_portions = portions_for(targets.protein, selection.protein.protein_per_100g);
    let carb_portions = portions_for(targets.carbs, selection.carb.carbs_per_100g);

    let mut ingredients = Vec::with_capacity(4);
    push_entry(
        &mut ingredients,
        selection.protein,
        protein_portions * PORTION_SIZE,
    );
    push_entry(&mut ingredients, selection.carb, carb_portions * PORTION_SIZE);

    if let Some(vegetable) = selection.vegetable {
        push_entry(&mut ingredients, vegetable, VEGETABLE_PORTIONS * PORTION_SIZE);
    }
    if let Some(fat) = selection.fat {
        let fat_portions = portions_for(targets.fats, fat.fats_per_100g);
        push_entry(&mut ingredients, fat, fat_portions * PORTION_SIZE);
    }

    debug!(
        protein_portions,
        carb_portions,
        "quantized: rounded to {}g portions",
        PORTION_SIZE
    );

    finish(ingredients, targets, start)
}
