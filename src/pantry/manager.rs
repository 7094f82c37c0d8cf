use std::collections::{HashMap, HashSet};

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::error::{RecipeError, Result};
use crate::models::{Category, Ingredient};
use crate::pantry::detection::{DetectedLabel, accepted_ingredient_ids};
use crate::pantry::persistence::dedup_by_id;

/// Minimum Jaro-Winkler similarity for a name to resolve without confirmation.
pub const FUZZY_ACCEPT_SCORE: f64 = 0.88;

/// Minimum similarity for a name to be offered as a suggestion.
pub const FUZZY_SUGGEST_SCORE: f64 = 0.7;

/// The user's kitchen: the catalog, what is on hand, and which equipment
/// exists to cook it.
pub struct Pantry {
    /// Catalog in load order. Pool order follows it.
    catalog: Vec<Ingredient>,
    /// Catalog position keyed by id.
    index: HashMap<String, usize>,
    selected: HashSet<String>,
    equipment: Vec<String>,
}

impl Pantry {
    /// Create a pantry over a catalog. Nothing is selected yet.
    ///
    /// Duplicate ids collapse to one entry, as when loading a catalog file.
    pub fn new(catalog: Vec<Ingredient>) -> Self {
        let catalog = dedup_by_id(catalog);
        let mut index = HashMap::new();
        for (i, ingredient) in catalog.iter().enumerate() {
            index.insert(ingredient.id.clone(), i);
        }
        Self {
            catalog,
            index,
            selected: HashSet::new(),
            equipment: Vec::new(),
        }
    }

    /// Get an ingredient by id.
    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.index.get(id).map(|&i| &self.catalog[i])
    }

    /// Get an ingredient by display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Ingredient> {
        let wanted = name.trim().to_lowercase();
        self.catalog
            .iter()
            .find(|i| i.name.to_lowercase() == wanted)
    }

    /// Catalog entries similar to `query`, best first.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<(&Ingredient, f64)> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&Ingredient, f64)> = self
            .catalog
            .iter()
            .map(|i| {
                let by_name = jaro_winkler(&i.name.to_lowercase(), &query);
                let by_id = jaro_winkler(&i.id, &query);
                (i, by_name.max(by_id))
            })
            .filter(|(_, score)| *score > FUZZY_SUGGEST_SCORE)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(limit);
        candidates
    }

    /// Resolve user input to a catalog entry: exact id, exact name, then the
    /// closest fuzzy match above [`FUZZY_ACCEPT_SCORE`].
    pub fn resolve(&self, query: &str) -> Result<&Ingredient> {
        if let Some(ingredient) = self.get(query.trim()).or_else(|| self.find_by_name(query)) {
            return Ok(ingredient);
        }

        match self.suggestions(query, 1).first() {
            Some(&(ingredient, score)) if score >= FUZZY_ACCEPT_SCORE => {
                warn!(
                    query,
                    matched = %ingredient.name,
                    score,
                    "resolved ingredient by fuzzy match"
                );
                Ok(ingredient)
            }
            _ => Err(RecipeError::IngredientNotFound(query.to_string())),
        }
    }

    /// Mark an ingredient as on hand. Returns whether it was newly selected.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        if !self.index.contains_key(id) {
            return Err(RecipeError::IngredientNotFound(id.to_string()));
        }
        Ok(self.selected.insert(id.to_string()))
    }

    /// Remove an ingredient from the selection.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Select the whole catalog.
    pub fn select_all(&mut self) {
        self.selected = self.index.keys().cloned().collect();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Register a piece of kitchen equipment.
    pub fn add_equipment(&mut self, id: &str) {
        let id = id.trim().to_lowercase();
        if !id.is_empty() && !self.equipment.contains(&id) {
            self.equipment.push(id);
        }
    }

    /// Register every equipment id the catalog mentions.
    pub fn equip_all(&mut self) {
        let needed: Vec<String> = self
            .catalog
            .iter()
            .flat_map(|i| i.equipment_needed.iter().cloned())
            .collect();
        for id in needed {
            self.add_equipment(&id);
        }
    }

    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    /// Merge classifier labels into the selection.
    ///
    /// Only confident labels mapped to a known catalog id count. Returns the
    /// number of ingredients newly selected.
    pub fn merge_detected(&mut self, labels: &[DetectedLabel]) -> usize {
        let mut added = 0;
        for id in accepted_ingredient_ids(labels) {
            match self.select(id) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(_) => warn!(id, "detected ingredient is not in the catalog"),
            }
        }
        debug!(labels = labels.len(), added, "merged detected labels");
        added
    }

    /// Ingredients the solvers may use: selected and cookable with the
    /// registered equipment, in catalog order.
    pub fn available_pool(&self) -> Vec<&Ingredient> {
        self.catalog
            .iter()
            .filter(|i| self.selected.contains(&i.id))
            .filter(|i| i.is_compatible_with(&self.equipment))
            .collect()
    }

    /// Catalog entries of one category.
    pub fn by_category(&self, category: Category) -> Vec<&Ingredient> {
        self.catalog
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.catalog
    }

    /// Count of catalog entries.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
