use assert_float_eq::assert_float_absolute_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use macro_recipe::models::{Category, Ingredient, MacroTargets};
use macro_recipe::optimizer::{
    GeneticSearch, IngredientPool, SolverConfig, StochasticConfig, Strategy, calculate_macros,
    deviation, optimize, solve_baseline, solve_continuous, solve_quantized, solve_stochastic,
};

fn make_ingredient(id: &str, category: Category, p: f64, c: f64, f: f64, kcal: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: id.to_string(),
        category,
        protein_per_100g: p,
        carbs_per_100g: c,
        fats_per_100g: f,
        calories_per_100g: kcal,
        cooking_methods: vec![],
        equipment_needed: vec![],
    }
}

fn simple_catalog() -> Vec<Ingredient> {
    vec![
        make_ingredient("chicken-breast", Category::Protein, 31.0, 0.0, 0.0, 165.0),
        make_ingredient("white-rice", Category::Carbs, 0.0, 28.0, 0.0, 130.0),
        make_ingredient("olive-oil", Category::Fats, 0.0, 0.0, 100.0, 884.0),
    ]
}

fn full_catalog() -> Vec<Ingredient> {
    vec![
        make_ingredient("eggs", Category::Protein, 13.0, 1.1, 11.0, 155.0),
        make_ingredient("chicken-breast", Category::Protein, 31.0, 0.0, 3.6, 165.0),
        make_ingredient("white-rice", Category::Carbs, 2.7, 28.0, 0.3, 130.0),
        make_ingredient("oats", Category::Carbs, 17.0, 66.0, 7.0, 389.0),
        make_ingredient("spinach", Category::Vegetables, 2.9, 3.6, 0.4, 23.0),
        make_ingredient("broccoli", Category::Vegetables, 2.8, 7.0, 0.4, 34.0),
        make_ingredient("avocado", Category::Fats, 2.0, 9.0, 15.0, 160.0),
        make_ingredient("olive-oil", Category::Fats, 0.0, 0.0, 100.0, 884.0),
        make_ingredient("garlic", Category::Seasonings, 6.4, 33.0, 0.5, 149.0),
    ]
}

fn refs(catalog: &[Ingredient]) -> Vec<&Ingredient> {
    catalog.iter().collect()
}

#[test]
fn test_continuous_reference_example() {
    let catalog = simple_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(150.0, 200.0, 50.0);

    let result = solve_continuous(&targets, &pool);
    assert!(result.feasible);
    assert_eq!(result.ingredients.len(), 3);

    assert_float_absolute_eq!(result.quantity_of("chicken-breast").unwrap(), 15000.0 / 31.0, 1e-9);
    assert_float_absolute_eq!(result.quantity_of("white-rice").unwrap(), 20000.0 / 28.0, 1e-9);
    assert_float_absolute_eq!(result.quantity_of("olive-oil").unwrap(), 50.0, 1e-9);

    let recomputed = calculate_macros(&result.ingredients);
    assert_eq!(result.macros, recomputed);
    assert_float_absolute_eq!(result.objective_value, deviation(&recomputed, &targets), 1e-12);

    // Pure single-macro ingredients hit every target.
    assert_float_absolute_eq!(result.macros.protein, 150.0, 1e-9);
    assert_float_absolute_eq!(result.macros.carbs, 200.0, 1e-9);
    assert_float_absolute_eq!(result.macros.fats, 50.0, 1e-9);
    assert!(result.objective_value < 1e-9);
}

#[test]
fn test_calories_come_from_declared_density() {
    let catalog = simple_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(150.0, 200.0, 50.0);

    let result = solve_continuous(&targets, &pool);
    let expected = result
        .ingredients
        .iter()
        .map(|e| e.ingredient.calories_per_100g * e.quantity / 100.0)
        .sum::<f64>();
    assert_float_absolute_eq!(result.macros.calories, expected, 1e-9);

    let atwater = 4.0 * result.macros.protein + 4.0 * result.macros.carbs + 9.0 * result.macros.fats;
    assert!((result.macros.calories - atwater).abs() > 1.0);
}

#[test]
fn test_quantized_reference_example() {
    let catalog = simple_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(150.0, 200.0, 50.0);

    let result = solve_quantized(&targets, &pool);
    assert!(result.feasible);
    assert_eq!(result.quantity_of("chicken-breast"), Some(500.0));
    assert_eq!(result.quantity_of("white-rice"), Some(700.0));
    assert_eq!(result.quantity_of("olive-oil"), Some(50.0));
}

#[test]
fn test_quantized_portions_on_full_pool() {
    let catalog = full_catalog();
    let pool = refs(&catalog);

    for targets in [
        MacroTargets::new(30.0, 45.0, 12.0),
        MacroTargets::new(180.0, 260.0, 90.0),
        MacroTargets::new(1.0, 1.0, 1.0),
    ] {
        let result = solve_quantized(&targets, &pool);
        assert!(result.feasible);
        for entry in &result.ingredients {
            assert!(entry.quantity >= 50.0);
            assert_eq!(entry.quantity % 50.0, 0.0, "{} not whole portions", entry.ingredient.id);
        }
    }
}

#[test]
fn test_continuous_floors_and_picks() {
    let catalog = full_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(5.0, 5.0, 1.0);

    let result = solve_continuous(&targets, &pool);
    let ids: Vec<&str> = result.ingredients.iter().map(|e| e.ingredient.id.as_str()).collect();
    // Densest protein and carb; vegetable and fat are first in pool order.
    assert_eq!(ids, vec!["chicken-breast", "oats", "spinach", "avocado"]);

    assert_eq!(result.quantity_of("chicken-breast"), Some(50.0));
    assert_eq!(result.quantity_of("oats"), Some(50.0));
    assert_eq!(result.quantity_of("spinach"), Some(100.0));
    assert_eq!(result.quantity_of("avocado"), Some(20.0));
}

#[test]
fn test_deterministic_solvers_are_idempotent() {
    let catalog = full_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(120.0, 150.0, 45.0);

    for solve in [solve_continuous, solve_quantized, solve_baseline] {
        let a = solve(&targets, &pool);
        let b = solve(&targets, &pool);
        assert_eq!(a.ingredients, b.ingredients);
        assert_eq!(a.macros, b.macros);
        assert_eq!(a.objective_value, b.objective_value);
    }
}

#[test]
fn test_baseline_ignores_targets() {
    let catalog = full_catalog();
    let pool = refs(&catalog);

    let small = solve_baseline(&MacroTargets::new(10.0, 10.0, 5.0), &pool);
    let large = solve_baseline(&MacroTargets::new(250.0, 400.0, 120.0), &pool);
    assert_eq!(small.ingredients, large.ingredients);

    let quantities: Vec<(&str, f64)> = small
        .ingredients
        .iter()
        .map(|e| (e.ingredient.id.as_str(), e.quantity))
        .collect();
    assert_eq!(
        quantities,
        vec![("eggs", 150.0), ("white-rice", 150.0), ("spinach", 100.0), ("avocado", 20.0)]
    );
}

#[test]
fn test_every_strategy_infeasible_without_protein() {
    let catalog: Vec<Ingredient> = full_catalog()
        .into_iter()
        .filter(|i| i.category != Category::Protein)
        .collect();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(100.0, 100.0, 30.0);
    let config = SolverConfig {
        stochastic: StochasticConfig::default().with_seed(1),
    };

    for strategy in Strategy::ALL {
        let result = optimize(strategy, &targets, &pool, &config).unwrap();
        assert!(!result.feasible, "{} should be infeasible", strategy);
        assert!(result.ingredients.is_empty());
        assert_eq!(result.macros.protein, 0.0);
        assert_eq!(result.macros.calories, 0.0);
        assert!(result.objective_value.is_infinite());
    }
}

#[test]
fn test_seasonings_never_receive_quantity() {
    let catalog = full_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(90.0, 120.0, 30.0);
    let config = SolverConfig {
        stochastic: StochasticConfig::default().with_seed(9),
    };

    for strategy in Strategy::ALL {
        let result = optimize(strategy, &targets, &pool, &config).unwrap();
        assert!(result.feasible);
        assert!(
            result
                .ingredients
                .iter()
                .all(|e| e.ingredient.category != Category::Seasonings)
        );
    }
}

#[test]
fn test_stochastic_seeded_runs_repeat() {
    let catalog = full_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(110.0, 140.0, 40.0);
    let config = StochasticConfig::default().with_seed(2024);

    let a = solve_stochastic(&targets, &pool, &config);
    let b = solve_stochastic(&targets, &pool, &config);
    assert!(a.feasible);
    assert_eq!(a.ingredients, b.ingredients);
    assert_eq!(a.objective_value, b.objective_value);
    assert_float_absolute_eq!(a.objective_value, deviation(&a.macros, &targets), 1e-9);
}

#[test]
fn test_stochastic_never_worse_than_initial_best() {
    let catalog = full_catalog();
    let available = refs(&catalog);
    let pool = IngredientPool::partition(&available);
    let targets = MacroTargets::new(140.0, 220.0, 60.0);
    let config = StochasticConfig::default();

    for seed in 0..10 {
        let mut search =
            GeneticSearch::new(&pool, &targets, &config, StdRng::seed_from_u64(seed)).unwrap();
        let initial_best = search.best().deviation;
        search.run();
        assert_eq!(search.generation(), config.generations);
        assert!(search.best().deviation <= initial_best);
        assert_eq!(search.population().len(), config.population_size);
    }
}

#[test]
fn test_invalid_targets_rejected() {
    let catalog = simple_catalog();
    let pool = refs(&catalog);
    let targets = MacroTargets::new(-5.0, 100.0, 30.0);
    assert!(optimize(Strategy::Continuous, &targets, &pool, &SolverConfig::default()).is_err());
}
