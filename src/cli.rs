use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::MealType;
use crate::optimizer::Strategy;

/// macro-recipe: size a recipe's ingredients to hit protein/carbs/fats targets.
#[derive(Parser, Debug)]
#[command(name = "macro-recipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the ingredient catalog JSON file.
    #[arg(short, long, global = true, default_value = "data/ingredients.json")]
    pub catalog: PathBuf,

    /// Log solver decisions (debug level).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one recipe with a single strategy.
    Solve {
        #[command(flatten)]
        input: SolveInput,

        /// Strategy: continuous (lp), quantized (milp), stochastic (genetic) or baseline (greedy).
        #[arg(short, long, default_value = "continuous")]
        strategy: Strategy,

        /// Write the result as JSON to this file.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Run every strategy on the same inputs and compare them.
    Compare {
        #[command(flatten)]
        input: SolveInput,

        /// Append one row per strategy to this CSV run log.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the catalog grouped by category.
    List,
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}

/// Targets and kitchen inputs shared by `solve` and `compare`.
#[derive(Args, Debug, Clone)]
pub struct SolveInput {
    /// Protein target in grams (prompted when omitted).
    #[arg(short, long)]
    pub protein: Option<f64>,

    /// Carbs target in grams (prompted when omitted).
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Fats target in grams (prompted when omitted).
    #[arg(short, long)]
    pub fats: Option<f64>,

    /// Meal type: breakfast, lunch, dinner or snack (prompted when omitted).
    #[arg(short, long)]
    pub meal: Option<MealType>,

    /// Ingredient on hand, by id or name. Repeatable. Defaults to the whole catalog.
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Available kitchen equipment id. Repeatable.
    #[arg(short, long = "equipment")]
    pub equipment: Vec<String>,

    /// JSON file of image-classifier labels to merge into the selection.
    #[arg(long)]
    pub detected: Option<PathBuf>,

    /// Seed for the stochastic strategy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never prompt; missing targets or unknown ingredients become errors.
    #[arg(long)]
    pub no_prompt: bool,
}
