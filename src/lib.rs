pub mod benchmark;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod pantry;

pub use error::{RecipeError, Result};
pub use models::{Category, Ingredient, MacroTargets, OptimizationResult};
pub use optimizer::{Strategy, optimize};
