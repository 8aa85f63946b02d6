use thiserror::Error;

use crate::form::FormError;

/// Errors that can occur while importing, storing or planning recipes
#[derive(Error, Debug)]
pub enum RecipeBoxError {
    /// Failed to fetch a recipe page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe page answered with a non-success status
    #[error("Request failed with status: {0}")]
    HttpStatus(u16),

    /// Reading or writing a data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Recipe form rejected its input
    #[error("Invalid recipe form: {0}")]
    Form(#[from] FormError),

    /// No recipe with the given identifier
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// A caller-supplied value could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, RecipeBoxError>;
