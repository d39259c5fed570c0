//! Brew parameter models used by the flavor estimator

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Green coffee processing methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProcessType {
    Washed,
    Natural,
    Honey,
}

impl ProcessType {
    /// All process types, in the order the frontend lists them
    pub const ALL: [ProcessType; 3] = [ProcessType::Washed, ProcessType::Natural, ProcessType::Honey];

    pub fn label(&self) -> &'static str {
        match self {
            ProcessType::Washed => "Washed",
            ProcessType::Natural => "Natural",
            ProcessType::Honey => "Honey",
        }
    }

    /// Short helper text shown next to the selector
    pub fn hint(&self) -> &'static str {
        match self {
            ProcessType::Washed => "clean & bright",
            ProcessType::Natural => "fruity & sweet",
            ProcessType::Honey => "balanced sweetness",
        }
    }

    /// Look up a process type by its label. Anything outside the catalog is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for ProcessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Roast levels offered by the estimator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoastLevel {
    Light,
    Medium,
    Dark,
}

impl RoastLevel {
    pub const ALL: [RoastLevel; 3] = [RoastLevel::Light, RoastLevel::Medium, RoastLevel::Dark];

    pub fn label(&self) -> &'static str {
        match self {
            RoastLevel::Light => "Light",
            RoastLevel::Medium => "Medium",
            RoastLevel::Dark => "Dark",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            RoastLevel::Light => "bright & acidic",
            RoastLevel::Medium => "balanced",
            RoastLevel::Dark => "bold & possibly smoky",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl std::fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Brewing devices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BrewMethod {
    V60,
    #[serde(rename = "French Press")]
    FrenchPress,
    Espresso,
    AeroPress,
}

impl BrewMethod {
    pub const ALL: [BrewMethod; 4] = [
        BrewMethod::V60,
        BrewMethod::FrenchPress,
        BrewMethod::Espresso,
        BrewMethod::AeroPress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BrewMethod::V60 => "V60",
            BrewMethod::FrenchPress => "French Press",
            BrewMethod::Espresso => "Espresso",
            BrewMethod::AeroPress => "AeroPress",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            BrewMethod::V60 => "clarity",
            BrewMethod::FrenchPress => "full-bodied",
            BrewMethod::Espresso => "intense",
            BrewMethod::AeroPress => "fast & flexible",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl std::fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Grind slider range (0 = fine, 100 = coarse)
pub const GRIND_LEVEL_MIN: i32 = 0;
pub const GRIND_LEVEL_MAX: i32 = 100;

/// Water temperature slider range in °C
pub const WATER_TEMP_MIN: i32 = 80;
pub const WATER_TEMP_MAX: i32 = 100;

/// Water ratio slider range (1:X)
pub const WATER_RATIO_MIN: i32 = 12;
pub const WATER_RATIO_MAX: i32 = 20;

/// Grind size bucket derived from the grind slider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrindSize {
    /// 0-33
    Fine,
    /// 34-66
    Medium,
    /// 67 and above
    Coarse,
}

impl GrindSize {
    pub fn from_level(grind_level: i32) -> Self {
        if grind_level <= 33 {
            GrindSize::Fine
        } else if grind_level <= 66 {
            GrindSize::Medium
        } else {
            GrindSize::Coarse
        }
    }
}

/// Water temperature band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TempBand {
    /// Below 90°C
    Lower,
    /// 90-95°C inclusive
    Moderate,
    /// Above 95°C
    Higher,
}

impl TempBand {
    pub fn from_celsius(water_temp: Decimal) -> Self {
        if water_temp < Decimal::from(90) {
            TempBand::Lower
        } else if water_temp > Decimal::from(95) {
            TempBand::Higher
        } else {
            TempBand::Moderate
        }
    }
}

/// Brew strength implied by the water ratio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrengthBand {
    /// Below 1:14
    Strong,
    /// 1:14 to 1:17 inclusive
    Moderate,
    /// Above 1:17
    Light,
}

impl StrengthBand {
    pub fn from_ratio(water_ratio: i32) -> Self {
        if water_ratio < 14 {
            StrengthBand::Strong
        } else if water_ratio > 17 {
            StrengthBand::Light
        } else {
            StrengthBand::Moderate
        }
    }
}

/// Inputs to the flavor estimator.
///
/// Categorical fields are `None` when the caller supplied a value outside
/// the catalog; the estimator simply leaves that dimension out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrewParameters {
    pub process_type: Option<ProcessType>,
    pub roast_level: Option<RoastLevel>,
    /// 0 = fine, 100 = coarse
    pub grind_level: i32,
    pub water_temp_celsius: Decimal,
    pub brew_method: Option<BrewMethod>,
    /// The X in 1:X
    pub water_ratio: i32,
}

impl BrewParameters {
    /// Build parameters from raw widget labels, mapping unknown labels to `None`
    pub fn from_labels(
        process_type: &str,
        roast_level: &str,
        grind_level: i32,
        water_temp_celsius: Decimal,
        brew_method: &str,
        water_ratio: i32,
    ) -> Self {
        Self {
            process_type: ProcessType::from_label(process_type),
            roast_level: RoastLevel::from_label(roast_level),
            grind_level,
            water_temp_celsius,
            brew_method: BrewMethod::from_label(brew_method),
            water_ratio,
        }
    }
}

impl Default for BrewParameters {
    fn default() -> Self {
        Self {
            process_type: Some(ProcessType::Washed),
            roast_level: Some(RoastLevel::Medium),
            grind_level: 33,
            water_temp_celsius: Decimal::from(93),
            brew_method: Some(BrewMethod::V60),
            water_ratio: 16,
        }
    }
}
