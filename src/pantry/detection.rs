use serde::{Deserialize, Serialize};

use crate::optimizer::constants::DETECTION_CONFIDENCE_THRESHOLD;

/// A label reported by the image classifier for an uploaded photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLabel {
    pub name: String,

    /// Classifier confidence in [0, 1].
    pub confidence: f64,

    /// Catalog id the label maps to, when the classifier found one.
    #[serde(default)]
    pub ingredient_id: Option<String>,
}

impl DetectedLabel {
    #[inline]
    pub fn is_confident(&self) -> bool {
        self.confidence >= DETECTION_CONFIDENCE_THRESHOLD
    }
}

/// Catalog ids of confident labels, deduplicated in report order.
pub fn accepted_ingredient_ids(labels: &[DetectedLabel]) -> Vec<&str> {
    let mut ids: Vec<&str> = Vec::new();
    for label in labels.iter().filter(|l| l.is_confident()) {
        if let Some(id) = label.ingredient_id.as_deref() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, confidence: f64, id: Option<&str>) -> DetectedLabel {
        DetectedLabel {
            name: name.to_string(),
            confidence,
            ingredient_id: id.map(str::to_string),
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(label("egg", 0.6, Some("eggs")).is_confident());
        assert!(!label("egg", 0.59, Some("eggs")).is_confident());
    }

    #[test]
    fn test_accepted_ids() {
        let labels = vec![
            label("Chicken", 0.92, Some("chicken-breast")),
            label("Food", 0.99, None),
            label("Rice", 0.41, Some("white-rice")),
            label("Poultry", 0.75, Some("chicken-breast")),
            label("Broccoli", 0.66, Some("broccoli")),
        ];
        assert_eq!(
            accepted_ingredient_ids(&labels),
            vec!["chicken-breast", "broccoli"]
        );
    }

    #[test]
    fn test_deserialize_classifier_payload() {
        let json = r#"[
            {"name": "Salmon", "confidence": 0.87, "ingredientId": "salmon"},
            {"name": "Plate", "confidence": 0.95, "ingredientId": null},
            {"name": "Bowl", "confidence": 0.8}
        ]"#;
        let labels: Vec<DetectedLabel> = serde_json::from_str(json).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].ingredient_id.as_deref(), Some("salmon"));
        assert!(labels[1].ingredient_id.is_none());
        assert!(labels[2].ingredient_id.is_none());
    }
}
