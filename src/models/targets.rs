use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};

/// Meal the recipe is for. Carried along for callers; solvers ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealType {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        MealType::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| RecipeError::InvalidInput(format!("unknown meal type '{}'", s)))
    }
}

/// Desired grams of each macro for one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default)]
    pub meal_type: MealType,
}

impl MacroTargets {
    pub fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
            meal_type: MealType::default(),
        }
    }

    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = meal_type;
        self
    }

    /// Reject negative, NaN or infinite gram targets.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
        ] {
            if !value.is_finite() {
                return Err(RecipeError::InvalidTargets(format!(
                    "{} target must be a finite number, got {}",
                    label, value
                )));
            }
            if value < 0.0 {
                return Err(RecipeError::InvalidTargets(format!(
                    "{} target must be >= 0, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}
