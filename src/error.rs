use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Invalid ingredient: {0}")]
    InvalidIngredient(String),

    #[error("Invalid macro targets: {0}")]
    InvalidTargets(String),

    #[error("Unknown strategy: {0} (expected continuous, quantized, stochastic or baseline)")]
    UnknownStrategy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No available ingredients")]
    NoAvailableIngredients,
}

pub type Result<T> = std::result::Result<T, RecipeError>;
