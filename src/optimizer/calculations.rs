use serde::Serialize;

use crate::models::{IngredientQuantity, MacroTargets, Macros};
use crate::optimizer::constants::{FAIR_MATCH_GRAMS, GOOD_MATCH_GRAMS};

/// Aggregate macros of a solution.
///
/// Each entry contributes `density * quantity / 100`. Calories come from the
/// ingredient's declared calorie density, not from the macro grams. No
/// rounding happens here.
pub fn calculate_macros(solution: &[IngredientQuantity<'_>]) -> Macros {
    let mut macros = Macros::default();
    for entry in solution {
        let factor = entry.quantity / 100.0;
        macros.protein += entry.ingredient.protein_per_100g * factor;
        macros.carbs += entry.ingredient.carbs_per_100g * factor;
        macros.fats += entry.ingredient.fats_per_100g * factor;
        macros.calories += entry.ingredient.calories_per_100g * factor;
    }
    macros
}

/// Sum of absolute gram errors for protein, carbs and fats.
///
/// Calories are not part of the objective.
#[inline]
pub fn deviation(macros: &Macros, targets: &MacroTargets) -> f64 {
    (macros.protein - targets.protein).abs()
        + (macros.carbs - targets.carbs).abs()
        + (macros.fats - targets.fats).abs()
}

/// Deviation of a solution, computing its macros on the way.
pub fn solution_deviation(solution: &[IngredientQuantity<'_>], targets: &MacroTargets) -> f64 {
    deviation(&calculate_macros(solution), targets)
}

/// Fitness used by the stochastic search: 1 for a perfect match, toward 0 as
/// deviation grows.
#[inline]
pub fn fitness(deviation: f64) -> f64 {
    1.0 / (1.0 + deviation)
}

/// How close one achieved macro is to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Good,
    Fair,
    Poor,
}

impl MatchQuality {
    /// Grade an achieved value against its target.
    pub fn grade(actual: f64, target: f64) -> Self {
        let diff = (actual - target).abs();
        if diff <= GOOD_MATCH_GRAMS {
            MatchQuality::Good
        } else if diff <= FAIR_MATCH_GRAMS {
            MatchQuality::Fair
        } else {
            MatchQuality::Poor
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchQuality::Good => "good",
            MatchQuality::Fair => "fair",
            MatchQuality::Poor => "poor",
        }
    }
}

/// Per-macro absolute errors of a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroErrors {
    pub protein_error: f64,
    pub carbs_error: f64,
    pub fats_error: f64,
}

impl MacroErrors {
    pub fn new(macros: &Macros, targets: &MacroTargets) -> Self {
        Self {
            protein_error: (macros.protein - targets.protein).abs(),
            carbs_error: (macros.carbs - targets.carbs).abs(),
            fats_error: (macros.fats - targets.fats).abs(),
        }
    }

    /// Sum of the three errors; equals the objective value.
    pub fn total(&self) -> f64 {
        self.protein_error + self.carbs_error + self.fats_error
    }

    /// Whether every macro is within the "good" tolerance.
    pub fn within_tolerance(&self) -> bool {
        self.protein_error <= GOOD_MATCH_GRAMS
            && self.carbs_error <= GOOD_MATCH_GRAMS
            && self.fats_error <= GOOD_MATCH_GRAMS
    }

    /// Grades in protein, carbs, fats order.
    pub fn grades(&self) -> [MatchQuality; 3] {
        [
            MatchQuality::grade(self.protein_error, 0.0),
            MatchQuality::grade(self.carbs_error, 0.0),
            MatchQuality::grade(self.fats_error, 0.0),
        ]
    }
}
