/// Grams per portion for the quantized solver.
pub const PORTION_SIZE: f64 = 50.0;

/// Minimum grams for the protein and carb entries of the continuous solver.
pub const MIN_PRIMARY_GRAMS: f64 = 50.0;

/// Minimum grams for the fat entry of the continuous solver.
pub const MIN_FAT_GRAMS: f64 = 20.0;

/// Fixed vegetable quantity shared by the continuous and baseline solvers.
pub const VEGETABLE_GRAMS: f64 = 100.0;

/// Fixed vegetable portions for the quantized solver (100g).
pub const VEGETABLE_PORTIONS: f64 = 2.0;

/// Minimum portions for protein, carbs and fat in the quantized solver.
pub const MIN_PORTIONS: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Baseline quantities (targets never influence these)
// ─────────────────────────────────────────────────────────────────────────────

pub const BASELINE_PROTEIN_GRAMS: f64 = 150.0;
pub const BASELINE_CARB_GRAMS: f64 = 150.0;
pub const BASELINE_FAT_GRAMS: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Stochastic search
// ─────────────────────────────────────────────────────────────────────────────

pub const POPULATION_SIZE: usize = 20;
pub const GENERATIONS: usize = 50;

/// Chance that an individual receives one mutation per generation.
pub const MUTATION_RATE: f64 = 0.2;

/// Individuals copied unmutated into the next generation.
pub const ELITISM: usize = 1;

/// Initial quantity range (grams) for protein and carbs.
pub const INIT_PRIMARY_RANGE: (f64, f64) = (50.0, 250.0);

/// Initial quantity range (grams) for vegetables.
pub const INIT_VEGETABLE_RANGE: (f64, f64) = (50.0, 200.0);

/// Initial quantity range (grams) for fats.
pub const INIT_FAT_RANGE: (f64, f64) = (10.0, 50.0);

/// Half-width of the uniform quantity perturbation.
pub const MUTATION_DELTA_GRAMS: f64 = 25.0;

/// Quantity floor after a perturbation.
pub const MUTATION_FLOOR_GRAMS: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Match quality
// ─────────────────────────────────────────────────────────────────────────────

/// Absolute error (grams) still graded "good".
pub const GOOD_MATCH_GRAMS: f64 = 10.0;

/// Absolute error (grams) still graded "fair".
pub const FAIR_MATCH_GRAMS: f64 = 20.0;

/// Minimum classifier confidence for a detected label to be merged.
pub const DETECTION_CONFIDENCE_THRESHOLD: f64 = 0.6;
