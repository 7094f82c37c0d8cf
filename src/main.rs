use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info};

use macro_recipe::benchmark::{RunRecord, append_runs_csv};
use macro_recipe::cli::{Cli, Command, SolveInput};
use macro_recipe::error::{RecipeError, Result};
use macro_recipe::interface::{
    collect_targets, display_catalog, display_comparison, display_result, prompt_ingredient_choice,
    prompt_yes_no,
};
use macro_recipe::logging::init_logging;
use macro_recipe::models::{MacroTargets, OptimizationResult};
use macro_recipe::optimizer::{SolverConfig, Strategy, optimize};
use macro_recipe::pantry::{Pantry, load_catalog, load_detected_labels};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "info" });

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Solve {
            input,
            strategy,
            json,
        } => cmd_solve(&cli.catalog, &input, strategy, json.as_deref()),
        Command::Compare { input, csv } => cmd_compare(&cli.catalog, &input, csv.as_deref()),
        Command::List => cmd_list(&cli.catalog),
    }
}

/// Load the catalog and set up the kitchen from the command line.
fn load_pantry(catalog_path: &Path, input: &SolveInput) -> Result<Pantry> {
    let catalog = load_catalog(catalog_path)?;
    let mut pantry = Pantry::new(catalog);
    println!("Loaded {} ingredients", pantry.len());

    if input.ingredients.is_empty() && input.detected.is_none() {
        pantry.select_all();
    }

    for query in &input.ingredients {
        let id = match pantry.resolve(query) {
            Ok(ingredient) => ingredient.id.clone(),
            Err(RecipeError::IngredientNotFound(_)) if !input.no_prompt => {
                match prompt_ingredient_choice(&pantry, query)? {
                    Some(ingredient) => ingredient.id.clone(),
                    None => {
                        println!("Skipping '{}'", query);
                        continue;
                    }
                }
            }
            Err(e) => return Err(e),
        };
        pantry.select(&id)?;
    }

    if let Some(path) = &input.detected {
        let labels = load_detected_labels(path)?;
        let added = pantry.merge_detected(&labels);
        println!("Added {} detected ingredients", added);
    }

    // No equipment given: assume a fully equipped kitchen.
    if input.equipment.is_empty() {
        pantry.equip_all();
    } else {
        for id in &input.equipment {
            pantry.add_equipment(id);
        }
    }

    let available = pantry.available_pool().len();
    if available == 0 {
        return Err(RecipeError::NoAvailableIngredients);
    }

    debug!(
        selected = pantry.selected_count(),
        available,
        equipment = ?pantry.equipment(),
        "pantry ready"
    );
    println!("{} ingredients available", available);
    Ok(pantry)
}

/// Targets from flags, prompting for the rest unless prompting is disabled.
fn read_targets(input: &SolveInput) -> Result<MacroTargets> {
    if !input.no_prompt {
        return collect_targets(input.protein, input.carbs, input.fats, input.meal);
    }

    let (Some(protein), Some(carbs), Some(fats)) = (input.protein, input.carbs, input.fats) else {
        return Err(RecipeError::InvalidInput(
            "--protein, --carbs and --fats are required with --no-prompt".to_string(),
        ));
    };

    let targets = MacroTargets::new(protein, carbs, fats).with_meal_type(input.meal.unwrap_or_default());
    targets.validate()?;
    Ok(targets)
}

fn solver_config(input: &SolveInput) -> SolverConfig {
    let mut config = SolverConfig::default();
    config.stochastic.seed = input.seed;
    config
}

/// Build one recipe with a single strategy.
fn cmd_solve(
    catalog_path: &Path,
    input: &SolveInput,
    strategy: Strategy,
    json_path: Option<&Path>,
) -> Result<()> {
    let pantry = load_pantry(catalog_path, input)?;
    let pool = pantry.available_pool();
    let targets = read_targets(input)?;

    let result = optimize(strategy, &targets, &pool, &solver_config(input))?;
    display_result(strategy, &targets, &result);

    if let Some(path) = json_path {
        write_result_json(path, &result, input.no_prompt)?;
    }

    Ok(())
}

/// Export a result, asking before replacing an existing file.
fn write_result_json(path: &Path, result: &OptimizationResult<'_>, no_prompt: bool) -> Result<()> {
    if path.exists() && !no_prompt {
        let overwrite = prompt_yes_no(&format!("Overwrite {}?", path.display()), false)?;
        if !overwrite {
            println!("Result not saved.");
            return Ok(());
        }
    }

    fs::write(path, serde_json::to_string_pretty(result)?)?;
    println!("Result written to {}", path.display());
    Ok(())
}

/// Run every strategy on the same inputs.
fn cmd_compare(catalog_path: &Path, input: &SolveInput, csv_path: Option<&Path>) -> Result<()> {
    let pantry = load_pantry(catalog_path, input)?;
    let pool = pantry.available_pool();
    let targets = read_targets(input)?;
    let solver = solver_config(input);

    let mut results = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let result = optimize(strategy, &targets, &pool, &solver)?;
        results.push((strategy, result));
    }

    display_comparison(&targets, &results);

    if let Some(path) = csv_path {
        let records: Vec<RunRecord> = results
            .iter()
            .map(|(strategy, result)| RunRecord::new(0, *strategy, &targets, pool.len(), result))
            .collect();
        append_runs_csv(&records, path)?;
        info!(rows = records.len(), path = %path.display(), "appended run log");
    }

    Ok(())
}

/// Print the catalog grouped by category.
fn cmd_list(catalog_path: &Path) -> Result<()> {
    if !catalog_path.exists() {
        eprintln!("Catalog file not found: {}", catalog_path.display());
        eprintln!("Pass --catalog or create data/ingredients.json.");
        return Ok(());
    }

    let catalog = load_catalog(catalog_path)?;
    display_catalog(&catalog);
    Ok(())
}
