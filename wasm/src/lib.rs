//! WebAssembly module for Krafty Brew Coffee
//!
//! Provides client-side computation for:
//! - Flavor outcome estimation
//! - Pour-over recipe steps and tips
//! - Coffee / water / ratio syncing for the recipe form

use js_sys::Array;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Largest magnitude a `Decimal` holds, rounded down to what an `f64` can state
const DECIMAL_LIMIT: f64 = 7.9e28;

/// Convert a form quantity. NaN, infinities and values past the `Decimal`
/// range are rejected rather than guessed at.
fn to_decimal(value: f64) -> Result<Decimal, String> {
    if !value.is_finite() || value.abs() >= DECIMAL_LIMIT {
        return Err(format!("Quantity out of range: {}", value));
    }
    // What still fails to convert is too small to represent
    Ok(Decimal::try_from(value).unwrap_or(Decimal::ZERO))
}

/// Convert a slider temperature. Values past the range keep their sign so
/// the temperature band still reads the right way.
fn to_temperature(value: f64) -> Result<Decimal, String> {
    if value.is_nan() {
        return Err("Water temperature must be a number".to_string());
    }
    if value >= DECIMAL_LIMIT {
        return Ok(Decimal::MAX);
    }
    if value <= -DECIMAL_LIMIT {
        return Ok(Decimal::MIN);
    }
    Ok(Decimal::try_from(value).unwrap_or(Decimal::ZERO))
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn to_array<I, S>(items: I) -> Array
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| JsValue::from_str(item.as_ref()))
        .collect()
}

fn recipe_inputs(coffee_grams: f64, water_ml: f64, ratio: f64) -> Result<RecipeInputs, String> {
    Ok(RecipeInputs::new(
        to_decimal(coffee_grams)?,
        to_decimal(water_ml)?,
        to_decimal(ratio)?,
    ))
}

fn brew_parameters(
    process_type: &str,
    roast_level: &str,
    grind_level: i32,
    water_temp: f64,
    brew_method: &str,
    water_ratio: i32,
) -> Result<BrewParameters, String> {
    Ok(BrewParameters::from_labels(
        process_type,
        roast_level,
        grind_level,
        to_temperature(water_temp)?,
        brew_method,
        water_ratio,
    ))
}

fn lookup_recipe(id: &str) -> Result<RecipeId, JsValue> {
    RecipeId::from_id(id).ok_or_else(|| {
        let err = shared::RecipeError::UnknownRecipe(id.to_string());
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        JsValue::from_str(&err.to_string())
    })
}

/// Describe the expected cup. Unknown labels simply leave their phrase out.
#[wasm_bindgen]
pub fn estimate_taste(
    process_type: &str,
    roast_level: &str,
    grind_level: i32,
    water_temp: f64,
    brew_method: &str,
    water_ratio: i32,
) -> Result<String, JsValue> {
    let params = brew_parameters(process_type, roast_level, grind_level, water_temp, brew_method, water_ratio)
        .map_err(js_error)?;
    Ok(shared::estimate_taste(&params))
}

/// Build the plan for a recipe as JSON (`{"steps": [...], "tips": [...]}`)
#[wasm_bindgen]
pub fn plan_recipe(id: &str, coffee_grams: f64, water_ml: f64, ratio: f64) -> Result<String, JsValue> {
    let recipe = lookup_recipe(id)?;
    let plan = recipe.plan(&recipe_inputs(coffee_grams, water_ml, ratio).map_err(js_error)?);
    serde_json::to_string(&plan).map_err(|e| JsValue::from_str(&format!("Failed to encode plan: {}", e)))
}

/// Brewing steps for a recipe
#[wasm_bindgen]
pub fn recipe_steps(id: &str, coffee_grams: f64, water_ml: f64, ratio: f64) -> Result<Array, JsValue> {
    let recipe = lookup_recipe(id)?;
    let inputs = recipe_inputs(coffee_grams, water_ml, ratio).map_err(js_error)?;
    Ok(to_array(recipe.steps(&inputs)))
}

/// Tips for a recipe (empty array when the recipe has none)
#[wasm_bindgen]
pub fn recipe_tips(id: &str, coffee_grams: f64, water_ml: f64, ratio: f64) -> Result<Array, JsValue> {
    let recipe = lookup_recipe(id)?;
    let inputs = recipe_inputs(coffee_grams, water_ml, ratio).map_err(js_error)?;
    Ok(to_array(recipe.tips(&inputs)))
}

/// Recipe catalog as JSON, in selector order
#[wasm_bindgen]
pub fn list_recipes() -> Result<String, JsValue> {
    serde_json::to_string(&shared::catalog())
        .map_err(|e| JsValue::from_str(&format!("Failed to encode catalog: {}", e)))
}

#[wasm_bindgen]
pub fn process_types() -> Array {
    to_array(ProcessType::ALL.iter().map(ProcessType::label))
}

#[wasm_bindgen]
pub fn roast_levels() -> Array {
    to_array(RoastLevel::ALL.iter().map(RoastLevel::label))
}

#[wasm_bindgen]
pub fn brew_methods() -> Array {
    to_array(BrewMethod::ALL.iter().map(BrewMethod::label))
}

/// New water volume after the coffee field changes
#[wasm_bindgen]
pub fn sync_water_from_coffee(coffee_grams: f64, ratio: f64) -> Result<f64, JsValue> {
    let synced = recipe_inputs(0.0, 0.0, ratio)
        .and_then(|inputs| to_decimal(coffee_grams).map(|value| inputs.with_coffee(value)))
        .map_err(js_error)?;
    Ok(to_f64(synced.water_ml))
}

/// New coffee dose after the water field changes
#[wasm_bindgen]
pub fn sync_coffee_from_water(water_ml: f64, ratio: f64) -> Result<f64, JsValue> {
    let synced = recipe_inputs(0.0, 0.0, ratio)
        .and_then(|inputs| to_decimal(water_ml).map(|value| inputs.with_water(value)))
        .map_err(js_error)?;
    Ok(to_f64(synced.coffee_grams))
}

/// New water volume after the ratio field changes
#[wasm_bindgen]
pub fn sync_water_from_ratio(coffee_grams: f64, ratio: f64) -> Result<f64, JsValue> {
    let synced = recipe_inputs(coffee_grams, 0.0, 0.0)
        .and_then(|inputs| to_decimal(ratio).map(|value| inputs.with_ratio(value)))
        .map_err(js_error)?;
    Ok(to_f64(synced.water_ml))
}

/// Summary line shown above the brew button
#[wasm_bindgen]
pub fn recipe_summary(coffee_grams: f64, water_ml: f64, ratio: f64) -> Result<String, JsValue> {
    let inputs = recipe_inputs(coffee_grams, water_ml, ratio).map_err(js_error)?;
    Ok(inputs.summary())
}

/// Check a complete estimator form; returns an error message or `undefined`
#[wasm_bindgen]
pub fn validate_estimator_form(
    process_type: &str,
    roast_level: &str,
    grind_level: i32,
    water_temp: f64,
    brew_method: &str,
    water_ratio: i32,
) -> Option<String> {
    match brew_parameters(process_type, roast_level, grind_level, water_temp, brew_method, water_ratio) {
        Ok(params) => validate_brew_parameters(&params).err().map(str::to_string),
        Err(message) => Some(message),
    }
}
