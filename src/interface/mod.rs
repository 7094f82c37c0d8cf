pub mod prompts;
pub mod render;

pub use prompts::{
    collect_targets, prompt_grams, prompt_ingredient_choice, prompt_meal_type, prompt_yes_no,
};
pub use render::{display_catalog, display_comparison, display_result};
