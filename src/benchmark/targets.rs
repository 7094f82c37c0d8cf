use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::models::{MacroTargets, MealType};

/// Min/max grams for each randomly drawn target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRanges {
    /// (min, max) protein grams
    pub protein: (f64, f64),
    /// (min, max) carbs grams
    pub carbs: (f64, f64),
    /// (min, max) fats grams
    pub fats: (f64, f64),
}

impl Default for TargetRanges {
    fn default() -> Self {
        Self {
            protein: (20.0, 200.0),
            carbs: (20.0, 300.0),
            fats: (5.0, 100.0),
        }
    }
}

impl TargetRanges {
    /// Draw targets uniformly within the ranges, rounded to whole grams.
    pub fn random(&self, rng: &mut impl Rng) -> MacroTargets {
        let meal_type = MealType::ALL
            .choose(rng)
            .copied()
            .unwrap_or_default();
        MacroTargets::new(
            rng.gen_range(self.protein.0..=self.protein.1).round(),
            rng.gen_range(self.carbs.0..=self.carbs.1).round(),
            rng.gen_range(self.fats.0..=self.fats.1).round(),
        )
        .with_meal_type(meal_type)
    }
}
