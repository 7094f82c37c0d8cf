use dialoguer::{Confirm, Input, Select};

use crate::error::{RecipeError, Result};
use crate::models::{Ingredient, MacroTargets, MealType};
use crate::pantry::Pantry;

/// Prompt for a gram target.
pub fn prompt_grams(macro_name: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("How many grams of {} should the meal have?", macro_name))
        .default(format!("{}", default))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| RecipeError::InvalidInput(format!("'{}' is not a number", input)))
}

/// Prompt for the meal type.
pub fn prompt_meal_type() -> Result<MealType> {
    let options: Vec<&str> = MealType::ALL.iter().map(|m| m.name()).collect();

    let selection = Select::new()
        .with_prompt("Which meal is this for?")
        .items(&options)
        .default(1) // lunch
        .interact()?;

    Ok(MealType::ALL[selection.min(MealType::ALL.len() - 1)])
}

/// Fill in any target not given on the command line, then validate.
pub fn collect_targets(
    protein: Option<f64>,
    carbs: Option<f64>,
    fats: Option<f64>,
    meal_type: Option<MealType>,
) -> Result<MacroTargets> {
    let protein = match protein {
        Some(v) => v,
        None => prompt_grams("protein", 40.0)?,
    };
    let carbs = match carbs {
        Some(v) => v,
        None => prompt_grams("carbs", 60.0)?,
    };
    let fats = match fats {
        Some(v) => v,
        None => prompt_grams("fats", 20.0)?,
    };
    let meal_type = match meal_type {
        Some(m) => m,
        None => prompt_meal_type()?,
    };

    let targets = MacroTargets::new(protein, carbs, fats).with_meal_type(meal_type);
    targets.validate()?;
    Ok(targets)
}

/// Ask the user which catalog entry they meant by `query`.
///
/// Returns `None` when nothing similar exists or the user declines.
pub fn prompt_ingredient_choice<'p>(pantry: &'p Pantry, query: &str) -> Result<Option<&'p Ingredient>> {
    let candidates = pantry.suggestions(query, 5);

    if candidates.is_empty() {
        println!("No matching ingredient found for '{}'", query);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let ingredient = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", ingredient.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(ingredient));
    }

    let mut options: Vec<String> = candidates.iter().map(|(i, _)| i.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(format!("Which ingredient did you mean by '{}'?", query))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).map(|(i, _)| *i))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
