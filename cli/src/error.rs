//! Error handling for the brew planner CLI

use serde::Serialize;
use shared::RecipeError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error body printed in `--json` mode
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Validation(_) => "VALIDATION_ERROR",
            CliError::Recipe(RecipeError::UnknownRecipe(_)) => "NOT_FOUND",
            CliError::Configuration(_) => "CONFIGURATION_ERROR",
            CliError::Serialization(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit status, following sysexits conventions
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) | CliError::Recipe(_) => 65,
            CliError::Configuration(_) => 78,
            CliError::Serialization(_) => 70,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        }
    }
}

impl From<&'static str> for CliError {
    fn from(message: &'static str) -> Self {
        CliError::Validation(message.to_string())
    }
}

/// Result type alias for CLI operations
pub type AppResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_recipe_response() {
        let err: CliError = RecipeError::UnknownRecipe("cold-brew".to_string()).into();
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Recipe not found: cold-brew");
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_validation_from_message() {
        let err: CliError = "Unknown roast level".into();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Validation error: Unknown roast level");
    }
}
