use crate::models::{Category, Ingredient, MacroTargets, OptimizationResult};
use crate::optimizer::{MacroErrors, Strategy};

/// Display one solve as a recipe table.
pub fn display_result(strategy: Strategy, targets: &MacroTargets, result: &OptimizationResult<'_>) {
    println!();
    println!(
        "=== {} recipe ({} / {}) ===",
        targets.meal_type,
        strategy,
        strategy.label()
    );
    println!();

    if !result.feasible {
        println!("No feasible recipe: the pool needs at least one protein and one carb source.");
        println!("Solve time: {:.2} ms", result.solve_time_ms);
        return;
    }

    let name_width = result
        .ingredients
        .iter()
        .map(|e| e.ingredient.name.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in result.ingredients.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:>7.1} g  [{}]",
            i + 1,
            entry.ingredient.name,
            entry.quantity,
            entry.ingredient.category,
            width = name_width
        );
    }

    let errors = MacroErrors::new(&result.macros, targets);
    let grades = errors.grades();

    println!();
    println!("--- Macros (achieved / target) ---");
    println!(
        "Protein: {:>6.1} / {:<6.1} g  {}",
        result.macros.protein,
        targets.protein,
        grades[0].name()
    );
    println!(
        "Carbs:   {:>6.1} / {:<6.1} g  {}",
        result.macros.carbs,
        targets.carbs,
        grades[1].name()
    );
    println!(
        "Fats:    {:>6.1} / {:<6.1} g  {}",
        result.macros.fats,
        targets.fats,
        grades[2].name()
    );
    println!("Calories: {:.0} kcal", result.macros.calories);
    println!();
    println!("Deviation: {:.2} g", result.objective_value);
    println!("Solve time: {:.2} ms", result.solve_time_ms);
    println!();
}

/// Display several strategies side by side.
pub fn display_comparison(targets: &MacroTargets, results: &[(Strategy, OptimizationResult<'_>)]) {
    println!();
    println!(
        "=== Strategy comparison (target P:{:.0} C:{:.0} F:{:.0}) ===",
        targets.protein, targets.carbs, targets.fats
    );
    println!();
    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>8} {:>10} {:>10}",
        "strategy", "protein", "carbs", "fats", "kcal", "deviation", "time (ms)"
    );

    for (strategy, result) in results {
        if !result.feasible {
            println!(
                "{:<12} {:>8} {:>8} {:>8} {:>8} {:>10} {:>10.3}",
                strategy.name(),
                "-",
                "-",
                "-",
                "-",
                "infeasible",
                result.solve_time_ms
            );
            continue;
        }
        println!(
            "{:<12} {:>8.1} {:>8.1} {:>8.1} {:>8.0} {:>10.2} {:>10.3}",
            strategy.name(),
            result.macros.protein,
            result.macros.carbs,
            result.macros.fats,
            result.macros.calories,
            result.objective_value,
            result.solve_time_ms
        );
    }

    let best = results
        .iter()
        .filter(|(_, r)| r.feasible)
        .min_by(|a, b| {
            a.1.objective_value
                .partial_cmp(&b.1.objective_value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    if let Some((strategy, result)) = best {
        println!();
        println!(
            "Closest match: {} ({:.2} g off)",
            strategy.name(),
            result.objective_value
        );
    }
    println!();
}

/// Display the catalog grouped by category.
pub fn display_catalog(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("Catalog: (empty)");
        return;
    }

    for category in Category::OPTIMIZED
        .into_iter()
        .chain(std::iter::once(Category::Seasonings))
    {
        let members: Vec<&Ingredient> = ingredients
            .iter()
            .filter(|i| i.category == category)
            .collect();
        if members.is_empty() {
            continue;
        }

        println!();
        println!("=== {} ({} items) ===", category, members.len());
        for ingredient in members {
            let equipment = if ingredient.equipment_needed.is_empty() {
                "no equipment".to_string()
            } else {
                ingredient.equipment_needed.join("/")
            };
            println!(
                "  {:<20} {:<18} P:{:<5} C:{:<5} F:{:<5} {:>4} kcal  ({})",
                ingredient.id,
                ingredient.name,
                ingredient.protein_per_100g,
                ingredient.carbs_per_100g,
                ingredient.fats_per_100g,
                ingredient.calories_per_100g,
                equipment
            );
        }
    }
    println!();
}
