//! Crop reference tables: expected NDVI baselines and sequestration rates.
//!
//! Unknown crop types resolve to the designated default entry rather than
//! failing: the verification pipeline must degrade gracefully on data the
//! calibration tables have not caught up with. Both lookup functions report
//! whether the fallback fired so the engine can record it.

use crate::practices::lookup;

/// Expected NDVI for a crop absent any practice bonus or seasonal shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBaseline {
    /// Reference NDVI in [0, 1].
    pub ndvi: f64,
    /// Width of the band a healthy reading is expected to stay inside.
    pub variance: f64,
}

/// The table entry unknown crops resolve to.
pub const DEFAULT_CROP: &str = "Mixed Farming";

const CROP_BASELINES: &[(&str, CropBaseline)] = &[
    ("Rice", CropBaseline { ndvi: 0.75, variance: 0.08 }),
    ("Wheat", CropBaseline { ndvi: 0.72, variance: 0.07 }),
    ("Maize", CropBaseline { ndvi: 0.78, variance: 0.08 }),
    ("Sugarcane", CropBaseline { ndvi: 0.82, variance: 0.06 }),
    ("Cotton", CropBaseline { ndvi: 0.68, variance: 0.09 }),
    ("Millets", CropBaseline { ndvi: 0.65, variance: 0.08 }),
    ("Pulses", CropBaseline { ndvi: 0.70, variance: 0.07 }),
    ("Organic Vegetables", CropBaseline { ndvi: 0.73, variance: 0.09 }),
    ("Agroforestry", CropBaseline { ndvi: 0.85, variance: 0.05 }),
    ("Mixed Farming", CropBaseline { ndvi: 0.70, variance: 0.10 }),
];

/// Base sequestration rate in tons CO2 per acre per year.
const SEQUESTRATION_RATES: &[(&str, f64)] = &[
    ("Rice", 0.9),
    ("Wheat", 0.8),
    ("Maize", 1.1),
    ("Sugarcane", 1.5),
    ("Cotton", 0.7),
    ("Millets", 0.85),
    ("Pulses", 1.0),
    ("Organic Vegetables", 1.2),
    ("Agroforestry", 2.5),
    ("Mixed Farming", 1.0),
];

/// Resolve a crop name to its baseline, falling back to [`DEFAULT_CROP`].
///
/// Returns the baseline and whether the fallback fired.
pub fn baseline_for(crop: &str) -> (CropBaseline, bool) {
    let name = crop.trim();
    match CROP_BASELINES
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
    {
        Some(&(_, baseline)) => (baseline, false),
        None => (default_baseline(), true),
    }
}

/// Resolve a crop name to its sequestration rate, falling back to the
/// default entry's rate. Returns the rate and whether the fallback fired.
pub fn sequestration_rate_for(crop: &str) -> (f64, bool) {
    match lookup(SEQUESTRATION_RATES, crop) {
        Some(rate) => (rate, false),
        None => (default_rate(), true),
    }
}

fn default_baseline() -> CropBaseline {
    CROP_BASELINES
        .iter()
        .find(|(entry, _)| *entry == DEFAULT_CROP)
        .map(|&(_, baseline)| baseline)
        .unwrap_or(CropBaseline { ndvi: 0.70, variance: 0.10 })
}

fn default_rate() -> f64 {
    lookup(SEQUESTRATION_RATES, DEFAULT_CROP).unwrap_or(1.0)
}
