//! Coffee dose, water volume and ratio

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{display_quantity, display_ratio, round_half_up, saturating_div, saturating_mul};

/// Quantities a recipe is scaled from.
///
/// `water_ml` is normally `coffee_grams * ratio`, but nothing here enforces
/// it: the planner works with whatever triple it is handed. Rescaled values
/// that fall outside the `Decimal` range are clamped to its bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecipeInputs {
    pub coffee_grams: Decimal,
    pub water_ml: Decimal,
    /// The X in 1:X
    pub ratio: Decimal,
}

impl RecipeInputs {
    pub fn new(coffee_grams: Decimal, water_ml: Decimal, ratio: Decimal) -> Self {
        Self {
            coffee_grams,
            water_ml,
            ratio,
        }
    }

    /// Change the coffee dose and rescale the water to keep the ratio
    pub fn with_coffee(self, coffee_grams: Decimal) -> Self {
        Self {
            coffee_grams,
            water_ml: round_half_up(saturating_mul(coffee_grams, self.ratio)),
            ..self
        }
    }

    /// Change the water volume and rescale the coffee to keep the ratio
    pub fn with_water(self, water_ml: Decimal) -> Self {
        let coffee_grams = if self.ratio.is_zero() {
            self.coffee_grams
        } else {
            round_half_up(saturating_div(water_ml, self.ratio))
        };
        Self {
            coffee_grams,
            water_ml,
            ..self
        }
    }

    /// Change the ratio and rescale the water for the current dose
    pub fn with_ratio(self, ratio: Decimal) -> Self {
        Self {
            ratio,
            water_ml: round_half_up(saturating_mul(self.coffee_grams, ratio)),
            ..self
        }
    }

    /// One-line summary shown above the brew button
    pub fn summary(&self) -> String {
        format!(
            "With {}g of coffee and a ratio of {}, you'll use about {}ml of water.",
            display_quantity(self.coffee_grams),
            display_ratio(self.ratio),
            display_quantity(self.water_ml)
        )
    }
}

impl Default for RecipeInputs {
    fn default() -> Self {
        Self {
            coffee_grams: Decimal::from(15),
            water_ml: Decimal::from(240),
            ratio: Decimal::from(16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_with_coffee_rescales_water() {
        let inputs = RecipeInputs::default().with_coffee(dec("20"));
        assert_eq!(inputs.coffee_grams, dec("20"));
        assert_eq!(inputs.water_ml, dec("320"));
        assert_eq!(inputs.ratio, dec("16"));
    }

    #[test]
    fn test_with_coffee_rounds_water() {
        let inputs = RecipeInputs::new(dec("15"), dec("240"), dec("15.5")).with_coffee(dec("17"));
        // 17 * 15.5 = 263.5
        assert_eq!(inputs.water_ml, dec("264"));
    }

    #[test]
    fn test_with_water_rescales_coffee() {
        let inputs = RecipeInputs::default().with_water(dec("300"));
        // 300 / 16 = 18.75
        assert_eq!(inputs.coffee_grams, dec("19"));
        assert_eq!(inputs.water_ml, dec("300"));
    }

    #[test]
    fn test_with_water_zero_ratio_keeps_coffee() {
        let inputs = RecipeInputs::new(dec("15"), dec("240"), Decimal::ZERO).with_water(dec("300"));
        assert_eq!(inputs.coffee_grams, dec("15"));
        assert_eq!(inputs.water_ml, dec("300"));
    }

    #[test]
    fn test_with_ratio_rescales_water() {
        let inputs = RecipeInputs::default().with_ratio(dec("14"));
        assert_eq!(inputs.water_ml, dec("210"));
        assert_eq!(inputs.coffee_grams, dec("15"));
    }

    #[test]
    fn test_rescaling_clamps_instead_of_overflowing() {
        let huge = dec("50000000000000000000000000000");
        assert_eq!(RecipeInputs::default().with_coffee(huge).water_ml, Decimal::MAX);
        assert_eq!(RecipeInputs::new(huge, dec("240"), dec("16")).with_ratio(dec("2")).water_ml, Decimal::MAX);

        let tiny_ratio = RecipeInputs::new(dec("15"), dec("240"), Decimal::new(1, 28)).with_water(dec("300"));
        assert_eq!(tiny_ratio.coffee_grams, Decimal::MAX);
        assert_eq!(tiny_ratio.water_ml, dec("300"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            RecipeInputs::default().summary(),
            "With 15g of coffee and a ratio of 1:16, you'll use about 240ml of water."
        );
    }
}
