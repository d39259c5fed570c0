//! Flavor outcome estimation
//!
//! Each brew dimension contributes one canned phrase. The phrases are joined
//! in a fixed order: process, roast, grind, temperature, method, ratio.

use super::brew::{BrewMethod, BrewParameters, GrindSize, ProcessType, RoastLevel, StrengthBand, TempBand};

impl ProcessType {
    pub fn taste_phrase(&self) -> &'static str {
        match self {
            ProcessType::Washed => "Cleaner, brighter notes.",
            ProcessType::Natural => "Fruity, sweet undertones.",
            ProcessType::Honey => "Balanced sweetness with mild acidity.",
        }
    }
}

impl RoastLevel {
    pub fn taste_phrase(&self) -> &'static str {
        match self {
            RoastLevel::Light => "Higher acidity, lighter body.",
            RoastLevel::Medium => "More balanced flavor.",
            RoastLevel::Dark => "Bolder with bittersweet, smoky notes.",
        }
    }
}

impl GrindSize {
    pub fn taste_phrase(&self) -> &'static str {
        match self {
            GrindSize::Fine => "Fine grind intensifies extraction, watch for bitterness.",
            GrindSize::Medium => "Medium grind yields balanced extraction.",
            GrindSize::Coarse => "Coarse grind extracts slower, often lighter body.",
        }
    }
}

impl TempBand {
    pub fn taste_phrase(&self) -> &'static str {
        match self {
            TempBand::Lower => "Lower temp reduces acidity & sweetness.",
            TempBand::Higher => "Higher temp boosts extraction, potential bitterness.",
            TempBand::Moderate => "Moderate temp for balanced extraction.",
        }
    }
}

impl BrewMethod {
    pub fn taste_phrase(&self) -> &'static str {
        match self {
            BrewMethod::V60 => "Clarity from pour-over style.",
            BrewMethod::FrenchPress => "Heavier body & oils from immersion.",
            BrewMethod::Espresso => "Concentrated, intense flavors with crema.",
            BrewMethod::AeroPress => "Quick brew, moderate body, flexible methods.",
        }
    }
}

impl StrengthBand {
    pub fn taste_phrase(&self) -> &'static str {
        match self {
            StrengthBand::Strong => "Strong, bold brew.",
            StrengthBand::Light => "Lighter, delicate brew.",
            StrengthBand::Moderate => "Moderately strong cup.",
        }
    }
}

/// Collect the phrase for every dimension, skipping out-of-catalog categories
pub fn taste_fragments(params: &BrewParameters) -> Vec<&'static str> {
    [
        params.process_type.map(|p| p.taste_phrase()),
        params.roast_level.map(|r| r.taste_phrase()),
        Some(GrindSize::from_level(params.grind_level).taste_phrase()),
        Some(TempBand::from_celsius(params.water_temp_celsius).taste_phrase()),
        params.brew_method.map(|m| m.taste_phrase()),
        Some(StrengthBand::from_ratio(params.water_ratio).taste_phrase()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Describe the expected cup for a set of brew parameters
pub fn estimate_taste(params: &BrewParameters) -> String {
    taste_fragments(params).join(" ")
}
