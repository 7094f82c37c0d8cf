use serde::{Deserialize, Serialize};

/// Ingredient category.
///
/// Only the first four are optimized over; seasonings ride along in the
/// catalog but never receive a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Carbs,
    Vegetables,
    Fats,
    Seasonings,
}

impl Category {
    /// Categories a solution may hold an entry for, in solution order.
    pub const OPTIMIZED: [Category; 4] = [
        Category::Protein,
        Category::Carbs,
        Category::Vegetables,
        Category::Fats,
    ];

    /// Slot index into a fixed-size per-category table.
    ///
    /// `None` for seasonings.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self {
            Category::Protein => Some(0),
            Category::Carbs => Some(1),
            Category::Vegetables => Some(2),
            Category::Fats => Some(3),
            Category::Seasonings => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Carbs => "carbs",
            Category::Vegetables => "vegetables",
            Category::Fats => "fats",
            Category::Seasonings => "seasonings",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog ingredient with per-100g macro densities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,

    pub name: String,

    pub category: Category,

    pub protein_per_100g: f64,

    pub carbs_per_100g: f64,

    pub fats_per_100g: f64,

    pub calories_per_100g: f64,

    #[serde(default)]
    pub cooking_methods: Vec<String>,

    #[serde(default)]
    pub equipment_needed: Vec<String>,
}

impl Ingredient {
    /// Grams of the macro this category is sized by, per 100g.
    ///
    /// Protein for proteins, carbs for carbs, fats for fats. Vegetables and
    /// seasonings are not sized against a target and return 0.
    #[inline]
    pub fn primary_density(&self) -> f64 {
        match self.category {
            Category::Protein => self.protein_per_100g,
            Category::Carbs => self.carbs_per_100g,
            Category::Fats => self.fats_per_100g,
            Category::Vegetables | Category::Seasonings => 0.0,
        }
    }

    /// Basic validation: finite, non-negative densities and a non-empty id.
    pub fn is_valid(&self) -> bool {
        let densities = [
            self.protein_per_100g,
            self.carbs_per_100g,
            self.fats_per_100g,
            self.calories_per_100g,
        ];
        !self.id.trim().is_empty() && densities.iter().all(|d| d.is_finite() && *d >= 0.0)
    }

    /// Whether this ingredient can be prepared with the given equipment.
    ///
    /// Ingredients needing no equipment are always compatible; otherwise any
    /// one of the needed items is enough. Ids compare case-insensitively.
    pub fn is_compatible_with<S: AsRef<str>>(&self, equipment: &[S]) -> bool {
        self.equipment_needed.is_empty()
            || self.equipment_needed.iter().any(|needed| {
                equipment
                    .iter()
                    .any(|have| have.as_ref().trim().eq_ignore_ascii_case(needed.trim()))
            })
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: P:{} C:{} F:{} {} kcal/100g",
            self.name,
            self.category,
            self.protein_per_100g,
            self.carbs_per_100g,
            self.fats_per_100g,
            self.calories_per_100g
        )
    }
}
