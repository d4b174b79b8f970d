//! Farmer-supplied practice data and the per-practice bonus tables.
//!
//! The bonus tables are plain data, not branching chains, so the scoring
//! rules stay auditable: each table maps a practice name to its additive
//! NDVI contribution. Lookups trim and compare ASCII-case-insensitively;
//! values outside a table contribute zero (soil health: a small penalty)
//! and are reported back so callers can tell a defaulted verification
//! from a fully-recognised one.

use serde::{Deserialize, Serialize};

/// A farmer's self-reported submission for one verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerPractices {
    pub crop_type: String,
    /// Cultivated area in acres. Must be positive.
    pub land_area: f64,
    /// Free text, used only for display.
    pub location: String,
    pub practices: PracticeSet,
}

/// The four practice dimensions scored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSet {
    pub fertilizer: String,
    pub irrigation: String,
    pub seed_type: String,
    pub soil_health: String,
}

/// NDVI bonus per fertilizer choice.
pub const FERTILIZER_BONUS: &[(&str, f64)] = &[
    ("Organic Manure", 0.08),
    ("Compost", 0.07),
    ("Bio-fertilizer", 0.06),
    ("Green Manure", 0.05),
    ("Reduced Chemical", 0.02),
];

/// NDVI bonus per irrigation method.
pub const IRRIGATION_BONUS: &[(&str, f64)] = &[
    ("Rainwater Harvesting", 0.06),
    ("Drip Irrigation", 0.05),
    ("Alternate Wetting and Drying", 0.04),
    ("Sprinkler", 0.03),
];

/// NDVI bonus per seed type.
pub const SEED_BONUS: &[(&str, f64)] = &[
    ("Drought Resistant", 0.04),
    ("Organic Seeds", 0.03),
    ("High Yield Variety", 0.02),
];

/// NDVI adjustment per soil-health rating. Degraded ratings carry the
/// same penalty as an unrecognised value but are part of the known set.
pub const SOIL_BONUS: &[(&str, f64)] = &[
    ("Excellent", 0.06),
    ("Good", 0.04),
    ("Average", 0.02),
    ("Needs Improvement", -0.02),
    ("Poor", -0.02),
];

/// Applied when the soil-health rating is missing or not in [`SOIL_BONUS`].
pub const SOIL_FALLBACK_PENALTY: f64 = -0.02;

/// An input field that degraded to its default during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackField {
    CropType,
    Fertilizer,
    Irrigation,
    SeedType,
    SoilHealth,
}

impl FallbackField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CropType => "cropType",
            Self::Fertilizer => "fertilizer",
            Self::Irrigation => "irrigation",
            Self::SeedType => "seedType",
            Self::SoilHealth => "soilHealth",
        }
    }
}

/// Per-dimension bonus contributions for one practice set.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeBonus {
    pub fertilizer: f64,
    pub irrigation: f64,
    pub seed_type: f64,
    pub soil_health: f64,
    /// Dimensions whose value was not in the known set.
    pub unrecognized: Vec<FallbackField>,
}

impl PracticeBonus {
    /// Total additive NDVI bonus across the four dimensions.
    pub fn total(&self) -> f64 {
        self.fertilizer + self.irrigation + self.seed_type + self.soil_health
    }
}

impl PracticeSet {
    /// Score this practice set against the bonus tables.
    ///
    /// Unknown fertilizer/irrigation/seed values contribute zero; an
    /// unknown soil-health rating contributes [`SOIL_FALLBACK_PENALTY`].
    /// Either way the dimension is listed in `unrecognized`.
    pub fn bonus(&self) -> PracticeBonus {
        let mut unrecognized = Vec::new();

        let fertilizer = lookup(FERTILIZER_BONUS, &self.fertilizer).unwrap_or_else(|| {
            unrecognized.push(FallbackField::Fertilizer);
            0.0
        });
        let irrigation = lookup(IRRIGATION_BONUS, &self.irrigation).unwrap_or_else(|| {
            unrecognized.push(FallbackField::Irrigation);
            0.0
        });
        let seed_type = lookup(SEED_BONUS, &self.seed_type).unwrap_or_else(|| {
            unrecognized.push(FallbackField::SeedType);
            0.0
        });
        let soil_health = lookup(SOIL_BONUS, &self.soil_health).unwrap_or_else(|| {
            unrecognized.push(FallbackField::SoilHealth);
            SOIL_FALLBACK_PENALTY
        });

        PracticeBonus {
            fertilizer,
            irrigation,
            seed_type,
            soil_health,
            unrecognized,
        }
    }
}

/// Case-insensitive lookup over a `(name, bonus)` table.
pub(crate) fn lookup(table: &[(&str, f64)], value: &str) -> Option<f64> {
    let value = value.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|&(_, bonus)| bonus)
}
