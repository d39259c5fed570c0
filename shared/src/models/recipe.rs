//! Pour-over recipe catalog and pour schedules

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dose::RecipeInputs;
use crate::error::RecipeError;
use crate::types::{
    display_quantity, display_ratio, round_half_up, saturating_div, saturating_mul, saturating_sub,
};

/// Brewing recipes offered by the planner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RecipeId {
    /// Tetsu Kasuya's 4:6 method
    #[default]
    #[serde(rename = "4-6")]
    FourSix,
    /// James Hoffmann's swirl method
    #[serde(rename = "james-hoffmann")]
    Swirl,
    /// Bloom, then two even pours
    #[serde(rename = "custom-drip")]
    CustomDrip,
}

impl RecipeId {
    /// Catalog order, as shown in the method selector
    pub const ALL: [RecipeId; 3] = [RecipeId::FourSix, RecipeId::Swirl, RecipeId::CustomDrip];

    /// Stable identifier used by the frontend
    pub fn id(&self) -> &'static str {
        match self {
            RecipeId::FourSix => "4-6",
            RecipeId::Swirl => "james-hoffmann",
            RecipeId::CustomDrip => "custom-drip",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecipeId::FourSix => "Hario V60 4:6 Method",
            RecipeId::Swirl => "James Hoffmann Method",
            RecipeId::CustomDrip => "Custom Drip",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecipeId::FourSix => {
                "The 4:6 method by Tetsu Kasuya divides the brew into two parts: sweetness and strength. \
                 Adjust water pours and intervals based on your taste preferences."
            }
            RecipeId::Swirl => {
                "A method focusing on swirling or agitation for even extraction. \
                 Timings and pours are crucial for optimal flavor."
            }
            RecipeId::CustomDrip => {
                "A simple two-pour drip recipe. Bloom first, then split the remaining water \
                 into two slow, even pours."
            }
        }
    }

    /// Ordered brewing instructions for the given quantities
    pub fn steps(&self, inputs: &RecipeInputs) -> Vec<String> {
        match self {
            RecipeId::FourSix => {
                let pours = FourSixPours::from_inputs(inputs);
                vec![
                    format!("Bloom: Pour ~{}ml water for 30-45 seconds.", display_quantity(pours.bloom_ml)),
                    format!(
                        "Sweetness phase: Pour ~{}ml water, wait ~45-60 seconds.",
                        display_quantity(pours.sweetness_ml)
                    ),
                    format!(
                        "Strength phase: Pour ~{}ml water in increments.",
                        display_quantity(pours.strength_ml)
                    ),
                    "Total brew time: ~2:30 - 3:00 minutes.".to_string(),
                ]
            }
            RecipeId::Swirl => {
                let pours = SwirlPours::from_inputs(inputs);
                vec![
                    format!(
                        "Bloom: Pour ~{}ml water, swirl gently (30-45s).",
                        display_quantity(pours.bloom_ml)
                    ),
                    format!(
                        "Main pour: Pour until ~{}ml total. Swirl again.",
                        display_quantity(pours.main_ml)
                    ),
                    format!(
                        "Final pour: Add remaining ~{}ml water. Swirl once more.",
                        display_quantity(pours.final_ml)
                    ),
                    "Total brew time: ~3:00 - 3:30 minutes.".to_string(),
                ]
            }
            RecipeId::CustomDrip => {
                let bloom_ml = bloom_water(inputs);
                let halfway_ml = round_half_up(saturating_div(inputs.water_ml, Decimal::from(2)));
                vec![
                    format!(
                        "Bloom: Pour ~{}ml water and let it rest for 30-45 seconds.",
                        display_quantity(bloom_ml)
                    ),
                    format!(
                        "First pour: Pour slowly in circles until ~{}ml total.",
                        display_quantity(halfway_ml)
                    ),
                    format!(
                        "Second pour: Finish at {}ml total and let the bed drain (~3:00 minutes).",
                        display_quantity(inputs.water_ml)
                    ),
                ]
            }
        }
    }

    /// Advice for the given quantities. Empty for recipes without tips.
    pub fn tips(&self, inputs: &RecipeInputs) -> Vec<String> {
        match self {
            RecipeId::FourSix => four_six_tips(inputs.ratio),
            RecipeId::Swirl | RecipeId::CustomDrip => Vec::new(),
        }
    }

    pub fn plan(&self, inputs: &RecipeInputs) -> RecipePlan {
        RecipePlan {
            steps: self.steps(inputs),
            tips: self.tips(inputs),
        }
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id().to_string(),
            label: self.label().to_string(),
            description: self.description().to_string(),
        }
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Brewing instructions produced for one recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecipePlan {
    pub steps: Vec<String>,
    pub tips: Vec<String>,
}

/// Catalog entry as listed in the method selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// Pour volumes for the 4:6 method.
///
/// Each volume is rounded on its own, so the three may not add up to the
/// total water exactly. Volumes past the `Decimal` range are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourSixPours {
    pub bloom_ml: Decimal,
    pub sweetness_ml: Decimal,
    pub strength_ml: Decimal,
}

impl FourSixPours {
    pub fn from_inputs(inputs: &RecipeInputs) -> Self {
        let bloom_ml = bloom_water(inputs);
        let after_bloom = saturating_sub(inputs.water_ml, bloom_ml);
        let sweetness_ml = round_half_up(saturating_mul(after_bloom, Decimal::new(4, 1)));
        let strength_ml = saturating_sub(after_bloom, sweetness_ml);
        Self {
            bloom_ml,
            sweetness_ml,
            strength_ml,
        }
    }
}

/// Pour volumes for the swirl method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwirlPours {
    pub bloom_ml: Decimal,
    pub main_ml: Decimal,
    pub final_ml: Decimal,
}

impl SwirlPours {
    pub fn from_inputs(inputs: &RecipeInputs) -> Self {
        let bloom_ml = bloom_water(inputs);
        let main_ml = round_half_up(saturating_mul(inputs.water_ml, Decimal::new(6, 1)));
        let final_ml = saturating_sub(saturating_sub(inputs.water_ml, bloom_ml), main_ml);
        Self {
            bloom_ml,
            main_ml,
            final_ml,
        }
    }
}

/// Bloom with twice the coffee weight in water
fn bloom_water(inputs: &RecipeInputs) -> Decimal {
    round_half_up(saturating_mul(inputs.coffee_grams, Decimal::from(2)))
}

fn four_six_tips(ratio: Decimal) -> Vec<String> {
    let mut tips = vec![
        "Increase the sweetness phase (50-60%) to emphasize sweetness.".to_string(),
        "Decrease the sweetness phase (30-35%) if you want brighter or more acidic flavors.".to_string(),
        "Swirl or stir lightly after each pour for even extraction.".to_string(),
    ];

    if ratio < Decimal::from(15) {
        tips.push(format!(
            "Your ratio ({}) is quite strong. You could add more water in the sweetness phase to balance any bitterness.",
            display_ratio(ratio)
        ));
    } else if ratio > Decimal::from(16) {
        tips.push(format!(
            "Your ratio ({}) is lighter. Slowing down pours or reducing the sweetness water may preserve complexity.",
            display_ratio(ratio)
        ));
    }

    tips
}

/// Look up a recipe by id and build its plan
pub fn plan_recipe(id: &str, inputs: &RecipeInputs) -> Result<RecipePlan, RecipeError> {
    RecipeId::from_id(id)
        .map(|recipe| recipe.plan(inputs))
        .ok_or_else(|| RecipeError::UnknownRecipe(id.to_string()))
}

/// Every recipe in the catalog, in selector order
pub fn catalog() -> Vec<RecipeSummary> {
    RecipeId::ALL.iter().map(RecipeId::summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(coffee: i64, water: i64, ratio: i64) -> RecipeInputs {
        RecipeInputs::new(Decimal::from(coffee), Decimal::from(water), Decimal::from(ratio))
    }

    #[test]
    fn test_four_six_pours() {
        let pours = FourSixPours::from_inputs(&inputs(15, 240, 16));
        assert_eq!(pours.bloom_ml, Decimal::from(30));
        assert_eq!(pours.sweetness_ml, Decimal::from(84));
        assert_eq!(pours.strength_ml, Decimal::from(126));
    }

    #[test]
    fn test_four_six_steps_text() {
        let steps = RecipeId::FourSix.steps(&inputs(15, 240, 16));
        assert_eq!(
            steps,
            vec![
                "Bloom: Pour ~30ml water for 30-45 seconds.",
                "Sweetness phase: Pour ~84ml water, wait ~45-60 seconds.",
                "Strength phase: Pour ~126ml water in increments.",
                "Total brew time: ~2:30 - 3:00 minutes.",
            ]
        );
    }

    #[test]
    fn test_four_six_tips_by_ratio() {
        assert_eq!(RecipeId::FourSix.tips(&inputs(15, 240, 15)).len(), 3);
        assert_eq!(RecipeId::FourSix.tips(&inputs(15, 240, 16)).len(), 3);

        let strong = RecipeId::FourSix.tips(&inputs(15, 210, 14));
        assert_eq!(strong.len(), 4);
        assert!(strong[3].starts_with("Your ratio (1:14) is quite strong."));

        let light = RecipeId::FourSix.tips(&inputs(15, 255, 17));
        assert_eq!(light.len(), 4);
        assert!(light[3].starts_with("Your ratio (1:17) is lighter."));
    }

    #[test]
    fn test_fractional_ratio_tip() {
        let tips = RecipeId::FourSix.tips(&RecipeInputs::new(
            Decimal::from(15),
            Decimal::from(240),
            Decimal::new(165, 1),
        ));
        assert_eq!(tips.len(), 4);
        assert!(tips[3].contains("(1:16.5)"));
    }

    #[test]
    fn test_swirl_steps() {
        let pours = SwirlPours::from_inputs(&inputs(15, 250, 16));
        assert_eq!(pours.bloom_ml, Decimal::from(30));
        assert_eq!(pours.main_ml, Decimal::from(150));
        assert_eq!(pours.final_ml, Decimal::from(70));

        let plan = RecipeId::Swirl.plan(&inputs(15, 250, 16));
        assert_eq!(plan.steps[1], "Main pour: Pour until ~150ml total. Swirl again.");
        assert_eq!(plan.steps[2], "Final pour: Add remaining ~70ml water. Swirl once more.");
        assert_eq!(plan.steps[3], "Total brew time: ~3:00 - 3:30 minutes.");
        assert!(plan.tips.is_empty());
    }

    #[test]
    fn test_custom_drip_steps() {
        let plan = RecipeId::CustomDrip.plan(&inputs(15, 245, 16));
        assert_eq!(plan.steps.len(), 3);
        assert!(plan.steps[0].contains("~30ml"));
        // 245 / 2 = 122.5 rounds up
        assert!(plan.steps[1].contains("~123ml"));
        assert!(plan.steps[2].contains("245ml"));
        assert!(plan.tips.is_empty());
    }

    #[test]
    fn test_independent_rounding_is_not_rebalanced() {
        let pours = FourSixPours::from_inputs(&RecipeInputs::new(
            Decimal::new(153, 1),
            Decimal::from(245),
            Decimal::from(16),
        ));
        // bloom = round(30.6) = 31, sweetness = round(214 * 0.4) = round(85.6) = 86
        assert_eq!(pours.bloom_ml, Decimal::from(31));
        assert_eq!(pours.sweetness_ml, Decimal::from(86));
        assert_eq!(pours.strength_ml, Decimal::from(128));
    }

    #[test]
    fn test_oversized_dose_clamps_pours() {
        let huge = RecipeInputs::new(
            Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0),
            Decimal::from(240),
            Decimal::from(16),
        );
        let pours = FourSixPours::from_inputs(&huge);
        assert_eq!(pours.bloom_ml, Decimal::MAX);
        assert!(pours.sweetness_ml.is_sign_negative());

        let swirl = SwirlPours::from_inputs(&huge);
        assert_eq!(swirl.bloom_ml, Decimal::MAX);
        assert_eq!(swirl.main_ml, Decimal::from(144));

        for recipe in RecipeId::ALL {
            assert_eq!(recipe.steps(&huge)[0].matches("79228162514264337593543950335").count(), 1);
        }
    }

    #[test]
    fn test_plan_recipe_lookup() {
        assert!(plan_recipe("4-6", &RecipeInputs::default()).is_ok());
        assert!(plan_recipe("james-hoffmann", &RecipeInputs::default()).is_ok());
        assert_eq!(
            plan_recipe("turbo-shot", &RecipeInputs::default()),
            Err(RecipeError::UnknownRecipe("turbo-shot".to_string()))
        );
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<String> = catalog().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["4-6", "james-hoffmann", "custom-drip"]);
    }

    #[test]
    fn test_recipe_id_serializes_with_frontend_id() {
        assert_eq!(serde_json::to_string(&RecipeId::FourSix).unwrap(), "\"4-6\"");
        let parsed: RecipeId = serde_json::from_str("\"custom-drip\"").unwrap();
        assert_eq!(parsed, RecipeId::CustomDrip);
    }
}
