use crate::models::{Category, Ingredient};

/// The available ingredients split by optimized category.
///
/// Groups keep the order of the input pool; seasonings are dropped.
#[derive(Debug, Clone, Default)]
pub struct IngredientPool<'a> {
    groups: [Vec<&'a Ingredient>; 4],
}

impl<'a> IngredientPool<'a> {
    /// Split an ordered pool into per-category groups.
    pub fn partition(available: &[&'a Ingredient]) -> Self {
        let mut pool = Self::default();
        for &ingredient in available {
            if let Some(slot) = ingredient.category.slot() {
                pool.groups[slot].push(ingredient);
            }
        }
        pool
    }

    /// Ingredients of one category, in pool order. Empty for seasonings.
    pub fn group(&self, category: Category) -> &[&'a Ingredient] {
        match category.slot() {
            Some(slot) => &self.groups[slot],
            None => &[],
        }
    }

    /// A pool is solvable only with at least one protein and one carb.
    pub fn is_feasible(&self) -> bool {
        !self.group(Category::Protein).is_empty() && !self.group(Category::Carbs).is_empty()
    }

    /// Categories with at least one candidate, in solution order.
    pub fn present_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::OPTIMIZED
            .into_iter()
            .filter(|c| !self.group(*c).is_empty())
    }

    /// First ingredient of a category.
    pub fn first(&self, category: Category) -> Option<&'a Ingredient> {
        self.group(category).first().copied()
    }

    /// Ingredient with the highest density of the category's own macro.
    ///
    /// Ties keep the first encountered.
    pub fn densest(&self, category: Category) -> Option<&'a Ingredient> {
        let mut best: Option<&'a Ingredient> = None;
        for &candidate in self.group(category) {
            match best {
                Some(current) if candidate.primary_density() <= current.primary_density() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    /// Total number of optimizable ingredients.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The one-per-category pick used by the deterministic solvers.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub protein: &'a Ingredient,
    pub carb: &'a Ingredient,
    pub vegetable: Option<&'a Ingredient>,
    pub fat: Option<&'a Ingredient>,
}

impl<'a> Selection<'a> {
    /// Densest protein, densest carb, first vegetable, first fat.
    ///
    /// `None` when the pool is infeasible.
    pub fn densest(pool: &IngredientPool<'a>) -> Option<Self> {
        Some(Self {
            protein: pool.densest(Category::Protein)?,
            carb: pool.densest(Category::Carbs)?,
            vegetable: pool.first(Category::Vegetables),
            fat: pool.first(Category::Fats),
        })
    }

    /// First ingredient of every group, no density comparison.
    pub fn first_available(pool: &IngredientPool<'a>) -> Option<Self> {
        Some(Self {
            protein: pool.first(Category::Protein)?,
            carb: pool.first(Category::Carbs)?,
            vegetable: pool.first(Category::Vegetables),
            fat: pool.first(Category::Fats),
        })
    }
}
