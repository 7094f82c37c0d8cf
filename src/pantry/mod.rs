mod detection;
mod manager;
mod persistence;

pub use detection::{DetectedLabel, accepted_ingredient_ids};
pub use manager::{FUZZY_ACCEPT_SCORE, FUZZY_SUGGEST_SCORE, Pantry};
pub use persistence::{load_catalog, load_detected_labels, save_catalog};
