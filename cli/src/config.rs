//! Configuration management for the brew planner CLI
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (the same starting form the web app shows)
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with KBREW_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{BrewMethod, ProcessType, RecipeInputs, RoastLevel};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Logging configuration
    pub log: LogConfig,

    /// Starting values for the flavor estimator
    pub estimator: EstimatorConfig,

    /// Starting values for the recipe planner
    pub recipe: RecipeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is not set
    pub filter: String,

    /// Output format
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EstimatorConfig {
    pub process_type: String,
    pub roast_level: String,
    pub grind_level: i32,
    pub water_temp: Decimal,
    pub brew_method: String,
    pub water_ratio: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    /// Recipe id, e.g. "4-6"
    pub method: String,
    pub coffee_grams: Decimal,
    pub water_ml: Decimal,
    pub ratio: Decimal,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("KBREW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KBREW_ prefix)
            .add_source(
                Environment::with_prefix("KBREW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    fn defaults(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("log.filter", "kbrew=info")?
            .set_default("log.format", "pretty")?
            .set_default("estimator.process_type", ProcessType::Washed.label())?
            .set_default("estimator.roast_level", RoastLevel::Medium.label())?
            .set_default("estimator.grind_level", 33)?
            .set_default("estimator.water_temp", 93)?
            .set_default("estimator.brew_method", BrewMethod::V60.label())?
            .set_default("estimator.water_ratio", 16)?
            .set_default("recipe.method", "4-6")?
            .set_default("recipe.coffee_grams", 15)?
            .set_default("recipe.water_ml", 240)?
            .set_default("recipe.ratio", 16)
    }
}

impl RecipeConfig {
    pub fn inputs(&self) -> RecipeInputs {
        RecipeInputs::new(self.coffee_grams, self.water_ml, self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BrewParameters;

    fn estimator_parameters(config: &EstimatorConfig) -> BrewParameters {
        BrewParameters::from_labels(
            &config.process_type,
            &config.roast_level,
            config.grind_level,
            config.water_temp,
            &config.brew_method,
            config.water_ratio,
        )
    }

    fn default_config() -> Config {
        Config::defaults("test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_match_web_form() {
        let config = default_config();
        assert_eq!(config.environment, "test");
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(estimator_parameters(&config.estimator), BrewParameters::default());
        assert_eq!(config.recipe.inputs(), RecipeInputs::default());
        assert_eq!(config.recipe.method, "4-6");
    }

    #[test]
    fn test_override_values() {
        let config: Config = Config::defaults("test")
            .unwrap()
            .set_override("estimator.brew_method", "Siphon")
            .unwrap()
            .set_override("recipe.ratio", "15.5")
            .unwrap()
            .set_override("log.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(estimator_parameters(&config.estimator).brew_method, None);
        assert_eq!(config.recipe.ratio, Decimal::new(155, 1));
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
