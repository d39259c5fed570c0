//! Command handlers for the brew planner CLI
//!
//! Each handler merges command-line overrides over the configured defaults,
//! calls into the shared brewing core and returns a serializable report.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    catalog, estimate_taste, validate_brew_parameters, validate_recipe_inputs, BrewMethod,
    BrewParameters, ProcessType, RecipeId, RecipeInputs, RecipeSummary, RoastLevel,
};

use crate::config::{EstimatorConfig, RecipeConfig};
use crate::error::{AppResult, CliError};

// ============================================================================
// Flavor Estimator
// ============================================================================

/// Command-line overrides for the estimator
#[derive(Debug, Default, Clone)]
pub struct TasteOverrides {
    pub process_type: Option<String>,
    pub roast_level: Option<String>,
    pub grind_level: Option<i32>,
    pub water_temp: Option<Decimal>,
    pub brew_method: Option<String>,
    pub water_ratio: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct TasteReport {
    pub parameters: BrewParameters,
    pub outcome: String,
}

impl TasteReport {
    pub fn render(&self) -> String {
        format!("Predicted Taste Outcome\n\n{}", self.outcome)
    }
}

/// Estimate the taste for the configured parameters plus overrides.
///
/// Outside strict mode an unknown label only drops its phrase.
pub fn taste(defaults: &EstimatorConfig, overrides: TasteOverrides, strict: bool) -> AppResult<TasteReport> {
    let process_label = overrides.process_type.unwrap_or_else(|| defaults.process_type.clone());
    let roast_label = overrides.roast_level.unwrap_or_else(|| defaults.roast_level.clone());
    let method_label = overrides.brew_method.unwrap_or_else(|| defaults.brew_method.clone());

    let parameters = BrewParameters::from_labels(
        &process_label,
        &roast_label,
        overrides.grind_level.unwrap_or(defaults.grind_level),
        overrides.water_temp.unwrap_or(defaults.water_temp),
        &method_label,
        overrides.water_ratio.unwrap_or(defaults.water_ratio),
    );

    if strict {
        validate_brew_parameters(&parameters)?;
    } else {
        if parameters.process_type.is_none() {
            tracing::warn!(label = %process_label, "Unknown process type, leaving it out");
        }
        if parameters.roast_level.is_none() {
            tracing::warn!(label = %roast_label, "Unknown roast level, leaving it out");
        }
        if parameters.brew_method.is_none() {
            tracing::warn!(label = %method_label, "Unknown brew method, leaving it out");
        }
    }

    let outcome = estimate_taste(&parameters);
    tracing::debug!(?parameters, "Estimated taste outcome");

    Ok(TasteReport { parameters, outcome })
}

// ============================================================================
// Recipe Planner
// ============================================================================

/// Command-line overrides for the recipe planner
#[derive(Debug, Default, Clone)]
pub struct RecipeOverrides {
    pub method: Option<String>,
    pub coffee_grams: Option<Decimal>,
    pub water_ml: Option<Decimal>,
    pub ratio: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct RecipeReport {
    pub recipe: RecipeSummary,
    pub inputs: RecipeInputs,
    pub summary: String,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
}

impl RecipeReport {
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} Instructions\n{}\n\n{}\n\nSteps:\n",
            self.recipe.label, self.recipe.description, self.summary
        );
        for (i, step) in self.steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
        if !self.tips.is_empty() {
            out.push_str("\nTips:\n");
            for tip in &self.tips {
                out.push_str(&format!("  - {}\n", tip));
            }
        }
        out.trim_end().to_string()
    }
}

/// Apply quantity overrides the way the web form syncs its fields:
/// ratio first, then coffee, then water. The last edited field wins.
pub fn apply_quantity_overrides(inputs: RecipeInputs, overrides: &RecipeOverrides) -> RecipeInputs {
    let mut inputs = inputs;
    if let Some(ratio) = overrides.ratio {
        inputs = inputs.with_ratio(ratio);
    }
    if let Some(coffee_grams) = overrides.coffee_grams {
        inputs = inputs.with_coffee(coffee_grams);
    }
    if let Some(water_ml) = overrides.water_ml {
        inputs = inputs.with_water(water_ml);
    }
    inputs
}

pub fn recipe(defaults: &RecipeConfig, overrides: RecipeOverrides, strict: bool) -> AppResult<RecipeReport> {
    let id = overrides.method.clone().unwrap_or_else(|| defaults.method.clone());
    let recipe = RecipeId::from_id(&id).ok_or(shared::RecipeError::UnknownRecipe(id))?;

    let inputs = apply_quantity_overrides(defaults.inputs(), &overrides);
    if let Err(message) = validate_recipe_inputs(&inputs) {
        if strict {
            return Err(CliError::from(message));
        }
        tracing::warn!(?inputs, "{}", message);
    }

    let plan = recipe.plan(&inputs);
    tracing::debug!(recipe = recipe.id(), steps = plan.steps.len(), tips = plan.tips.len(), "Planned recipe");

    Ok(RecipeReport {
        recipe: recipe.summary(),
        inputs,
        summary: inputs.summary(),
        steps: plan.steps,
        tips: plan.tips,
    })
}

/// List the recipe catalog
pub fn recipes() -> Vec<RecipeSummary> {
    catalog()
}

pub fn render_recipes(recipes: &[RecipeSummary]) -> String {
    recipes
        .iter()
        .map(|r| format!("{:<16} {}\n{:<16} {}", r.id, r.label, "", r.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ============================================================================
// Option Catalogs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct OptionEntry {
    pub label: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsReport {
    pub process_types: Vec<OptionEntry>,
    pub roast_levels: Vec<OptionEntry>,
    pub brew_methods: Vec<OptionEntry>,
}

impl OptionsReport {
    pub fn render(&self) -> String {
        let section = |title: &str, entries: &[OptionEntry]| {
            let lines: Vec<String> = entries
                .iter()
                .map(|e| format!("  {:<14} {}", e.label, e.hint))
                .collect();
            format!("{}:\n{}", title, lines.join("\n"))
        };
        [
            section("Process types", &self.process_types[..]),
            section("Roast levels", &self.roast_levels[..]),
            section("Brew methods", &self.brew_methods[..]),
        ]
        .join("\n\n")
    }
}

/// Categorical choices accepted by `taste`
pub fn options() -> OptionsReport {
    OptionsReport {
        process_types: ProcessType::ALL
            .iter()
            .map(|p| OptionEntry { label: p.label(), hint: p.hint() })
            .collect(),
        roast_levels: RoastLevel::ALL
            .iter()
            .map(|r| OptionEntry { label: r.label(), hint: r.hint() })
            .collect(),
        brew_methods: BrewMethod::ALL
            .iter()
            .map(|m| OptionEntry { label: m.label(), hint: m.hint() })
            .collect(),
    }
}
