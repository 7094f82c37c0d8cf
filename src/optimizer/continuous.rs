use std::time::Instant;

use tracing::debug;

use crate::models::{Ingredient, MacroTargets, OptimizationResult};
use crate::optimizer::constants::{MIN_FAT_GRAMS, MIN_PRIMARY_GRAMS, VEGETABLE_GRAMS};
use crate::optimizer::pool::{IngredientPool, Selection};
use crate::optimizer::{elapsed_ms, finish, push_entry};

/// Grams needed to reach `target` at `density` per 100g, never below `floor`.
///
/// A zero-density ingredient cannot move its macro, so it gets the floor.
pub fn proportional_quantity(target: f64, density: f64, floor: f64) -> f64 {
    if density <= 0.0 {
        return floor;
    }
    floor.max(target * 100.0 / density)
}

/// Continuous ("LP") solver.
///
/// Picks the densest protein and carb, the first vegetable and fat, then
/// sizes each by direct proportion to its target.
pub fn solve_continuous<'a>(
    targets: &MacroTargets,
    available: &[&'a Ingredient],
) -> OptimizationResult<'a> {
    let start = Instant::now();
    let pool = IngredientPool::partition(available);

    let Some(selection) = Selection::densest(&pool) else {
        debug!(pool_size = available.len(), "continuous: infeasible pool");
        return OptimizationResult::infeasible(elapsed_ms(start));
    };

    let protein_qty = proportional_quantity(
        targets.protein,
        selection.protein.protein_per_100g,
        MIN_PRIMARY_GRAMS,
    );
    let carb_qty = proportional_quantity(
        targets.carbs,
        selection.carb.carbs_per_100g,
        MIN_PRIMARY_GRAMS,
    );

    let mut ingredients = Vec::with_capacity(4);
    push_entry(&mut ingredients, selection.protein, protein_qty);
    push_entry(&mut ingredients, selection.carb, carb_qty);

    if let Some(vegetable) = selection.vegetable {
        push_entry(&mut ingredients, vegetable, VEGETABLE_GRAMS);
    }
    if let Some(fat) = selection.fat {
        let fat_qty = proportional_quantity(targets.fats, fat.fats_per_100g, MIN_FAT_GRAMS);
        push_entry(&mut ingredients, fat, fat_qty);
    }

    debug!(
        protein = %selection.protein.id,
        carb = %selection.carb.id,
        protein_qty,
        carb_qty,
        "continuous: sized selection"
    );

    finish(ingredients, targets, start)
}
