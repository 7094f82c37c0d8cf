mod ingredient;
mod solution;
mod targets;

pub use ingredient::{Category, Ingredient};
pub use solution::{IngredientQuantity, Macros, OptimizationResult, Solution};
pub use targets::{MacroTargets, MealType};
