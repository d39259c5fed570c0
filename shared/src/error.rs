//! Error types for the brewing core

use thiserror::Error;

/// Errors returned by recipe lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    UnknownRecipe(String),
}
