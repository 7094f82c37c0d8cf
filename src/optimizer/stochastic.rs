use std::cmp::Ordering;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RecipeError, Result};
use crate::models::{
    Category, Ingredient, IngredientQuantity, MacroTargets, OptimizationResult, Solution,
};
use crate::optimizer::calculations::{calculate_macros, fitness, solution_deviation};
use crate::optimizer::constants::*;
use crate::optimizer::elapsed_ms;
use crate::optimizer::pool::IngredientPool;

/// Parameters of the population search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Per-individual chance of one mutation each generation.
    pub mutation_rate: f64,
    /// Best individuals carried over unmutated. 0 fills every slot by
    /// tournament.
    pub elitism: usize,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            population_size: POPULATION_SIZE,
            generations: GENERATIONS,
            mutation_rate: MUTATION_RATE,
            elitism: ELITISM,
            seed: None,
        }
    }
}

impl StochasticConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(RecipeError::InvalidInput(
                "population size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(RecipeError::InvalidInput(format!(
                "mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// One population member. Owns its solution; clones never share entries.
#[derive(Debug, Clone)]
pub struct Individual<'a> {
    pub solution: Solution<'a>,
    pub deviation: f64,
}

impl<'a> Individual<'a> {
    fn new(solution: Solution<'a>, targets: &MacroTargets) -> Self {
        let deviation = solution_deviation(&solution, targets);
        Self {
            solution,
            deviation,
        }
    }

    pub fn fitness(&self) -> f64 {
        fitness(self.deviation)
    }
}

/// Initial quantity range for a category.
fn init_range(category: Category) -> (f64, f64) {
    match category {
        Category::Protein | Category::Carbs => INIT_PRIMARY_RANGE,
        Category::Vegetables => INIT_VEGETABLE_RANGE,
        Category::Fats | Category::Seasonings => INIT_FAT_RANGE,
    }
}

/// One uniformly random ingredient and quantity per present category.
fn random_solution<'a, R: Rng + ?Sized>(pool: &IngredientPool<'a>, rng: &mut R) -> Solution<'a> {
    let mut solution = Vec::with_capacity(4);
    for category in pool.present_categories() {
        if let Some(&ingredient) = pool.group(category).choose(rng) {
            let (low, high) = init_range(category);
            solution.push(IngredientQuantity::new(ingredient, rng.gen_range(low..high)));
        }
    }
    solution
}

/// Apply exactly one mutation to a random entry.
///
/// Half the time the quantity moves by up to 25g (floor 10g); otherwise the
/// ingredient is swapped for a different one of the same category, when the
/// category has an alternative.
fn mutate<'a, R: Rng + ?Sized>(solution: &mut Solution<'a>, pool: &IngredientPool<'a>, rng: &mut R) {
    if solution.is_empty() {
        return;
    }
    let idx = rng.gen_range(0..solution.len());

    if rng.gen_bool(0.5) {
        let delta = rng.gen_range(-MUTATION_DELTA_GRAMS..=MUTATION_DELTA_GRAMS);
        let entry = &mut solution[idx];
        entry.quantity = (entry.quantity + delta).max(MUTATION_FLOOR_GRAMS);
    } else {
        let current = solution[idx].ingredient;
        let candidates = pool.group(current.category);
        if candidates.len() > 1 {
            let others: Vec<&'a Ingredient> = candidates
                .iter()
                .copied()
                .filter(|c| !std::ptr::eq(*c, current))
                .collect();
            if let Some(&replacement) = others.choose(rng) {
                solution[idx].ingredient = replacement;
            }
        }
    }
}

/// Population search over ingredient choice and quantity.
pub struct GeneticSearch<'p, 'a, R> {
    pool: &'p IngredientPool<'a>,
    targets: MacroTargets,
    config: StochasticConfig,
    population: Vec<Individual<'a>>,
    generation: usize,
    rng: R,
}

impl<'p, 'a, R: Rng> GeneticSearch<'p, 'a, R> {
    /// Seed the initial population. `None` for an infeasible pool.
    pub fn new(
        pool: &'p IngredientPool<'a>,
        targets: &MacroTargets,
        config: &StochasticConfig,
        mut rng: R,
    ) -> Option<Self> {
        if !pool.is_feasible() {
            return None;
        }
        let size = config.population_size.max(1);
        let population = (0..size)
            .map(|_| Individual::new(random_solution(pool, &mut rng), targets))
            .collect();

        Some(Self {
            pool,
            targets: targets.clone(),
            config: config.clone(),
            population,
            generation: 0,
            rng,
        })
    }

    pub fn population(&self) -> &[Individual<'a>] {
        &self.population
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Lowest-deviation member; ties keep the first encountered.
    pub fn best(&self) -> &Individual<'a> {
        let mut best = &self.population[0];
        for candidate in &self.population[1..] {
            if candidate.deviation < best.deviation {
                best = candidate;
            }
        }
        best
    }

    /// Advance one generation: elitism, binary tournaments, mutation.
    pub fn step(&mut self) {
        let size = self.population.len();
        let mutation_rate = self.config.mutation_rate.clamp(0.0, 1.0);
        let fitness: Vec<f64> = self.population.iter().map(Individual::fitness).collect();

        let mut next = Vec::with_capacity(size);

        let elite = self.config.elitism.min(size);
        if elite > 0 {
            let mut order: Vec<usize> = (0..size).collect();
            order.sort_by(|&a, &b| {
                self.population[a]
                    .deviation
                    .partial_cmp(&self.population[b].deviation)
                    .unwrap_or(Ordering::Equal)
            });
            next.extend(order[..elite].iter().map(|&i| self.population[i].clone()));
        }

        while next.len() < size {
            let a = self.rng.gen_range(0..size);
            let b = self.rng.gen_range(0..size);
            let winner = if fitness[a] > fitness[b] { a } else { b };

            let mut child = self.population[winner].clone();
            if self.rng.gen_bool(mutation_rate) {
                mutate(&mut child.solution, self.pool, &mut self.rng);
                child.deviation = solution_deviation(&child.solution, &self.targets);
            }
            next.push(child);
        }

        self.population = next;
        self.generation += 1;

        trace!(
            generation = self.generation,
            best_deviation = self.best().deviation,
            "stochastic: generation complete"
        );
    }

    /// Run the remaining generations.
    pub fn run(&mut self) {
        while self.generation < self.config.generations {
            self.step();
        }
    }
}

/// Stochastic ("Genetic") solver with a caller-provided random source.
pub fn solve_stochastic_with_rng<'a, R: Rng>(
    targets: &MacroTargets,
    available: &[&'a Ingredient],
    config: &StochasticConfig,
    rng: R,
) -> OptimizationResult<'a> {
    let start = Instant::now();
    let pool = IngredientPool::partition(available);

    let Some(mut search) = GeneticSearch::new(&pool, targets, config, rng) else {
        debug!(pool_size = available.len(), "stochastic: infeasible pool");
        return OptimizationResult::infeasible(elapsed_ms(start));
    };

    let initial_best = search.best().deviation;
    search.run();
    let best = search.best();

    debug!(
        generations = search.generation(),
        initial_best,
        final_best = best.deviation,
        "stochastic: search finished"
    );

    OptimizationResult {
        ingredients: best.solution.clone(),
        macros: calculate_macros(&best.solution),
        solve_time_ms: elapsed_ms(start),
        feasible: true,
        objective_value: best.deviation,
    }
}

/// Stochastic ("Genetic") solver seeded from `config.seed`, or from entropy
/// when no seed is set.
pub fn solve_stochastic<'a>(
    targets: &MacroTargets,
    available: &[&'a Ingredient],
    config: &StochasticConfig,
) -> OptimizationResult<'a> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    solve_stochastic_with_rng(targets, available, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: &str, category: Category, p: f64, c: f64, f: f64) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            category,
            protein_per_100g: p,
            carbs_per_100g: c,
            fats_per_100g: f,
            calories_per_100g: 4.0 * p + 4.0 * c + 9.0 * f,
            cooking_methods: vec![],
            equipment_needed: vec![],
        }
    }

    fn catalog() -> Vec<Ingredient> {
        vec![
            ingredient("chicken", Category::Protein, 31.0, 0.0, 3.6),
            ingredient("salmon", Category::Protein, 20.0, 0.0, 13.0),
            ingredient("rice", Category::Carbs, 2.7, 28.0, 0.3),
            ingredient("pasta", Category::Carbs, 5.0, 25.0, 1.1),
            ingredient("broccoli", Category::Vegetables, 2.8, 7.0, 0.4),
            ingredient("olive-oil", Category::Fats, 0.0, 0.0, 100.0),
        ]
    }

    #[test]
    fn test_initial_population_respects_ranges() {
        let catalog = catalog();
        let available: Vec<&Ingredient> = catalog.iter().collect();
        let pool = IngredientPool::partition(&available);
        let targets = MacroTargets::new(100.0, 100.0, 30.0);
        let search = GeneticSearch::new(
            &pool,
            &targets,
            &StochasticConfig::default(),
            StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(search.population().len(), POPULATION_SIZE);
        for individual in search.population() {
            assert_eq!(individual.solution.len(), 4);
            for entry in &individual.solution {
                let (low, high) = init_range(entry.ingredient.category);
                assert!(entry.quantity >= low && entry.quantity < high);
            }
        }
    }

    #[test]
    fn test_mutation_keeps_category_and_floor() {
        let catalog = catalog();
        let available: Vec<&Ingredient> = catalog.iter().collect();
        let pool = IngredientPool::partition(&available);
        let mut rng = StdRng::seed_from_u64(9);

        let mut solution = random_solution(&pool, &mut rng);
        let categories: Vec<Category> = solution.iter().map(|e| e.ingredient.category).collect();
        for _ in 0..500 {
            mutate(&mut solution, &pool, &mut rng);
            let after: Vec<Category> = solution.iter().map(|e| e.ingredient.category).collect();
            assert_eq!(after, categories);
            assert!(solution.iter().all(|e| e.quantity >= MUTATION_FLOOR_GRAMS));
        }
    }

    #[test]
    fn test_swap_picks_a_different_ingredient() {
        let catalog = catalog();
        let available: Vec<&Ingredient> = catalog.iter().collect();
        let pool = IngredientPool::partition(&available);
        let mut rng = StdRng::seed_from_u64(3);

        let mut swapped = false;
        for _ in 0..200 {
            let mut solution = vec![IngredientQuantity::new(&catalog[0], 100.0)];
            mutate(&mut solution, &pool, &mut rng);
            if solution[0].quantity == 100.0 {
                assert_eq!(solution[0].ingredient.id, "salmon");
                swapped = true;
            }
        }
        assert!(swapped);
    }

    #[test]
    fn test_elite_never_worsens() {
        let catalog = catalog();
        let available: Vec<&Ingredient> = catalog.iter().collect();
        let pool = IngredientPool::partition(&available);
        let targets = MacroTargets::new(140.0, 180.0, 45.0);
        let mut search = GeneticSearch::new(
            &pool,
            &targets,
            &StochasticConfig::default(),
            StdRng::seed_from_u64(21),
        )
        .unwrap();

        let mut previous = search.best().deviation;
        for _ in 0..GENERATIONS {
            search.step();
            let current = search.best().deviation;
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_invalid_config() {
        let zero = StochasticConfig {
            population_size: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let rate = StochasticConfig {
            mutation_rate: 1.5,
            ..Default::default()
        };
        assert!(rate.validate().is_err());
        assert!(StochasticConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tournament_only_generations() {
        let catalog = catalog();
        let available: Vec<&Ingredient> = catalog.iter().collect();
        let pool = IngredientPool::partition(&available);
        let targets = MacroTargets::new(120.0, 160.0, 40.0);
        let config = StochasticConfig {
            elitism: 0,
            ..StochasticConfig::default()
        };

        let mut search = GeneticSearch::new(&pool, &targets, &config, StdRng::seed_from_u64(17)).unwrap();
        search.run();
        assert_eq!(search.generation(), GENERATIONS);
        assert_eq!(search.population().len(), POPULATION_SIZE);

        // Duplicate the minimum at the end; the earlier copy must still win.
        let lowest = search
            .population()
            .iter()
            .map(|i| i.deviation)
            .fold(f64::INFINITY, f64::min);
        let first = search
            .population()
            .iter()
            .position(|i| i.deviation == lowest)
            .unwrap();
        let duplicate = search.population[first].clone();
        search.population.push(duplicate);

        assert!(std::ptr::eq(search.best(), &search.population()[first]));
    }
}
