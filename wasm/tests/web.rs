//! Browser tests for the WASM bindings
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use krafty_brew_wasm::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_recipe_steps_array() {
    let steps = recipe_steps("4-6", 15.0, 240.0, 16.0).unwrap();
    assert_eq!(steps.length(), 4);
    assert_eq!(
        steps.get(2).as_string().unwrap(),
        "Strength phase: Pour ~126ml water in increments."
    );
}

#[wasm_bindgen_test]
fn test_recipe_tips_array() {
    let tips = recipe_tips("4-6", 15.0, 210.0, 14.0).unwrap();
    assert_eq!(tips.length(), 4);

    let none = recipe_tips("james-hoffmann", 15.0, 240.0, 16.0).unwrap();
    assert_eq!(none.length(), 0);
}

#[wasm_bindgen_test]
fn test_unknown_recipe_is_an_error() {
    let err = plan_recipe("cold-brew", 15.0, 240.0, 16.0).unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Recipe not found: cold-brew");
    assert!(recipe_steps("cold-brew", 15.0, 240.0, 16.0).is_err());
}

#[wasm_bindgen_test]
fn test_option_catalogs() {
    assert_eq!(process_types().length(), 3);
    assert_eq!(roast_levels().length(), 3);
    let methods = brew_methods();
    assert_eq!(methods.length(), 4);
    assert_eq!(methods.get(1).as_string().unwrap(), "French Press");
}

#[wasm_bindgen_test]
fn test_list_recipes_json() {
    let json = list_recipes().unwrap();
    assert!(json.starts_with("[{\"id\":\"4-6\""));
}

#[wasm_bindgen_test]
fn test_unrepresentable_quantities_are_errors() {
    let err = plan_recipe("4-6", 1e30, 240.0, 16.0).unwrap_err();
    assert_eq!(
        err.as_string().unwrap(),
        "Quantity out of range: 1000000000000000000000000000000"
    );
    assert!(recipe_steps("james-hoffmann", 15.0, f64::NAN, 16.0).is_err());
    assert!(recipe_tips("4-6", 15.0, 240.0, f64::INFINITY).is_err());
    assert!(sync_water_from_coffee(f64::NAN, 16.0).is_err());
    assert!(recipe_summary(15.0, 240.0, f64::NEG_INFINITY).is_err());
}

#[wasm_bindgen_test]
fn test_nan_temperature_is_an_error() {
    let err = estimate_taste("Washed", "Medium", 33, f64::NAN, "V60", 16).unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Water temperature must be a number");
}
