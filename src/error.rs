//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain nutrition
//! @acp:layer model

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Per-record anomalies (bad numbers, unknown categories) never produce an
/// error; they degrade to defaults inside the engine.
#[derive(Error, Debug)]
pub enum NutrientError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse dataset: {0}")]
    Dataset(#[from] csv::Error),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("Unknown nutrient: {0} (expected potassium, sodium or fructose)")]
    UnknownNutrient(String),

    #[error("No food named '{0}' in the current view")]
    UnknownFood(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NutrientError>;
