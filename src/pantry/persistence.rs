use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RecipeError, Result};
use crate::models::Ingredient;
use crate::pantry::detection::DetectedLabel;

/// Load an ingredient catalog from a JSON file.
///
/// Every record must be valid. Duplicate ids collapse to one entry: the last
/// record's data at the first record's position.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<Ingredient> = serde_json::from_str(&content)?;

    if let Some(bad) = records.iter().find(|i| !i.is_valid()) {
        return Err(RecipeError::InvalidIngredient(bad.debug_string()));
    }

    let loaded = records.len();
    let catalog = dedup_by_id(records);
    debug!(loaded, kept = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Save a catalog to a JSON file, deduplicated by id.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &[Ingredient]) -> Result<()> {
    let deduped = dedup_by_id(catalog.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load classifier labels from a JSON file.
pub fn load_detected_labels<P: AsRef<Path>>(path: P) -> Result<Vec<DetectedLabel>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Collapse duplicate ids: the last record's data at the first record's position.
pub(crate) fn dedup_by_id(records: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<Ingredient> = Vec::with_capacity(records.len());
    for record in records {
        match position.get(&record.id) {
            Some(&idx) => deduped[idx] = record,
            None => {
                position.insert(record.id.clone(), deduped.len());
                deduped.push(record);
            }
        }
    }
    deduped
}
