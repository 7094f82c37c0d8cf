use serde::Serialize;

use crate::models::Ingredient;

/// One assignment entry: an ingredient and its quantity in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IngredientQuantity<'a> {
    pub ingredient: &'a Ingredient,
    pub quantity: f64,
}

impl<'a> IngredientQuantity<'a> {
    pub fn new(ingredient: &'a Ingredient, quantity: f64) -> Self {
        Self {
            ingredient,
            quantity,
        }
    }
}

/// A candidate assignment, at most one entry per optimized category.
pub type Solution<'a> = Vec<IngredientQuantity<'a>>;

/// Aggregate macros of a solution: grams of protein/carbs/fats and kcal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

/// Output envelope shared by every strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult<'a> {
    pub ingredients: Solution<'a>,
    pub macros: Macros,
    pub solve_time_ms: f64,
    pub feasible: bool,
    /// Sum of absolute macro errors; `f64::INFINITY` when infeasible.
    pub objective_value: f64,
}

impl<'a> OptimizationResult<'a> {
    /// Result for a pool lacking a protein or a carb source.
    pub fn infeasible(solve_time_ms: f64) -> Self {
        Self {
            ingredients: Vec::new(),
            macros: Macros::default(),
            solve_time_ms,
            feasible: false,
            objective_value: f64::INFINITY,
        }
    }

    /// Quantity assigned to the ingredient with the given id, if present.
    pub fn quantity_of(&self, id: &str) -> Option<f64> {
        self.ingredients
            .iter()
            .find(|entry| entry.ingredient.id == id)
            .map(|entry| entry.quantity)
    }
}
