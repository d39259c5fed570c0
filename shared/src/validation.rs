//! Input validation for brew parameters and recipe quantities
//!
//! The estimator and planner never call these; they trust their inputs.
//! Hosts (the WASM bindings, the CLI) use them to reject widget values that
//! fall outside the ranges the frontend offers.

use rust_decimal::Decimal;

use crate::models::{
    BrewParameters, RecipeInputs, GRIND_LEVEL_MAX, GRIND_LEVEL_MIN, WATER_RATIO_MAX, WATER_RATIO_MIN,
    WATER_TEMP_MAX, WATER_TEMP_MIN,
};

// ============================================================================
// Estimator Validations
// ============================================================================

/// Validate grind level is on the 0-100 slider
pub fn validate_grind_level(grind_level: i32) -> Result<(), &'static str> {
    if !(GRIND_LEVEL_MIN..=GRIND_LEVEL_MAX).contains(&grind_level) {
        return Err("Grind level must be between 0 and 100");
    }
    Ok(())
}

/// Validate water temperature is between 80 and 100°C
pub fn validate_water_temp(water_temp: Decimal) -> Result<(), &'static str> {
    if water_temp < Decimal::from(WATER_TEMP_MIN) || water_temp > Decimal::from(WATER_TEMP_MAX) {
        return Err("Water temperature must be between 80 and 100°C");
    }
    Ok(())
}

/// Validate water ratio is between 1:12 and 1:20
pub fn validate_water_ratio(water_ratio: i32) -> Result<(), &'static str> {
    if !(WATER_RATIO_MIN..=WATER_RATIO_MAX).contains(&water_ratio) {
        return Err("Water ratio must be between 1:12 and 1:20");
    }
    Ok(())
}

/// Validate every estimator input, including that each category is in the catalog
pub fn validate_brew_parameters(params: &BrewParameters) -> Result<(), &'static str> {
    if params.process_type.is_none() {
        return Err("Unknown process type");
    }
    if params.roast_level.is_none() {
        return Err("Unknown roast level");
    }
    if params.brew_method.is_none() {
        return Err("Unknown brew method");
    }
    validate_grind_level(params.grind_level)?;
    validate_water_temp(params.water_temp_celsius)?;
    validate_water_ratio(params.water_ratio)?;
    Ok(())
}

// ============================================================================
// Recipe Validations
// ============================================================================

/// Validate coffee, water and ratio are all positive
pub fn validate_recipe_inputs(inputs: &RecipeInputs) -> Result<(), &'static str> {
    if inputs.coffee_grams <= Decimal::ZERO {
        return Err("Coffee weight must be greater than 0");
    }
    if inputs.water_ml <= Decimal::ZERO {
        return Err("Water volume must be greater than 0");
    }
    if inputs.ratio <= Decimal::ZERO {
        return Err("Ratio must be greater than 0");
    }
    Ok(())
}
