//! The scoring core: baseline lookup, practice bonus, scene application,
//! and verdict derivation.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use carbonleaf_core::{
    DEFAULT_CROP, FallbackField, FarmerPractices, HealthStatus, LandAreaVerification, NdviReading,
    VegetationAnalysis, VerificationResult, VerifyError, baseline_for, sequestration_rate_for,
};

use crate::scene::{Clock, SceneConditions, SystemClock};

/// NDVI readings are reported inside this band.
pub const NDVI_FLOOR: f64 = 0.10;
pub const NDVI_CEILING: f64 = 0.95;

/// Vegetation counts as healthy at or above this NDVI.
pub const HEALTHY_NDVI: f64 = 0.65;

/// Area accuracy must reach this percentage for the area check to pass.
pub const AREA_ACCURACY_FLOOR: f64 = 90.0;

const NDVI_CONFIDENCE_REFERENCE: f64 = 0.85;
const NDVI_CONFIDENCE_WEIGHT: f64 = 60.0;
const AREA_CONFIDENCE_WEIGHT: f64 = 0.4;

/// Verification engine with an owned randomness source and clock.
///
/// Each call to [`Verifier::verify`] draws one [`SceneConditions`] and runs
/// the deterministic core; the engine holds no other state, so separate
/// instances can run on any number of threads without coordination.
pub struct Verifier<R: Rng = StdRng, C: Clock = SystemClock> {
    rng: R,
    clock: C,
}

impl Verifier {
    /// Entropy-seeded verifier on the system clock.
    pub fn new() -> Self {
        Verifier {
            rng: StdRng::from_entropy(),
            clock: SystemClock,
        }
    }

    /// Reproducible verifier: same seed, same sequence of scenes.
    pub fn seeded(seed: u64) -> Self {
        Verifier {
            rng: StdRng::seed_from_u64(seed),
            clock: SystemClock,
        }
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng, C: Clock> Verifier<R, C> {
    /// Build from explicit parts, for deterministic tests and callers that
    /// manage their own randomness.
    pub fn with_parts(rng: R, clock: C) -> Self {
        Verifier { rng, clock }
    }

    /// Verify one submission, drawing a fresh scene.
    pub fn verify(
        &mut self,
        practices: &FarmerPractices,
    ) -> Result<VerificationResult, VerifyError> {
        let scene = SceneConditions::sample(&mut self.rng);
        verify_scene(practices, &scene, self.clock.now())
    }
}

/// The deterministic scoring core.
///
/// Fails only on a non-positive (or non-finite) land area; every other
/// malformed input degrades through the fallback tables and is recorded on
/// the result.
pub fn verify_scene(
    practices: &FarmerPractices,
    scene: &SceneConditions,
    now: DateTime<Utc>,
) -> Result<VerificationResult, VerifyError> {
    if !practices.land_area.is_finite() || practices.land_area <= 0.0 {
        return Err(VerifyError::InvalidLandArea(practices.land_area));
    }

    let mut fallbacks = Vec::new();

    let (baseline, crop_fell_back) = baseline_for(&practices.crop_type);
    if crop_fell_back {
        warn!(
            crop = %practices.crop_type,
            default = DEFAULT_CROP,
            "unknown crop type, scoring against the default baseline"
        );
        fallbacks.push(FallbackField::CropType);
    }

    let bonus = practices.practices.bonus();
    for field in &bonus.unrecognized {
        warn!(field = field.as_str(), "unrecognised practice value, no bonus applied");
    }
    fallbacks.extend(bonus.unrecognized.iter().copied());

    let ndvi = round3((baseline.ndvi + bonus.total() + scene.seasonal_shift).clamp(NDVI_FLOOR, NDVI_CEILING));
    if (ndvi - baseline.ndvi).abs() > baseline.variance {
        debug!(
            ndvi,
            baseline = baseline.ndvi,
            variance = baseline.variance,
            "reading outside the crop's expected variance band"
        );
    }

    let previous = baseline.ndvi * scene.prior_ratio;
    let change = round3(ndvi - previous);

    let reported = practices.land_area;
    let detected = reported * scene.area_factor;
    let accuracy = round2((100.0 * (1.0 - (detected - reported).abs() / reported)).clamp(0.0, 100.0));

    let healthy = ndvi >= HEALTHY_NDVI;
    let area_ok = accuracy >= AREA_ACCURACY_FLOOR;

    let ndvi_confidence =
        ((ndvi / NDVI_CONFIDENCE_REFERENCE) * NDVI_CONFIDENCE_WEIGHT).min(100.0);
    let area_confidence = accuracy * AREA_CONFIDENCE_WEIGHT;
    // The raw sum can overshoot 100 when NDVI saturates; the report caps it.
    let confidence = (ndvi_confidence + area_confidence).round().min(100.0) as u8;

    let (base_rate, _) = sequestration_rate_for(&practices.crop_type);
    let sequestration_rate = round2(base_rate * sequestration_multiplier(ndvi) * reported);

    Ok(VerificationResult {
        is_verified: healthy && area_ok,
        confidence,
        ndvi_data: NdviReading {
            value: ndvi,
            change,
            health_score: (ndvi * 100.0).round() as u8,
            date: now,
        },
        land_area_verification: LandAreaVerification {
            reported_area: round2(reported),
            satellite_detected_area: round2(detected),
            accuracy,
        },
        vegetation_analysis: VegetationAnalysis {
            crop_type: practices.crop_type.clone(),
            health_status: HealthStatus::from_ndvi(ndvi),
            sequestration_rate,
        },
        source: scene.source,
        image_resolution: scene.source.resolution_m(),
        cloud_coverage: round2(scene.cloud_coverage),
        verification_date: now,
        fallbacks,
    })
}

fn sequestration_multiplier(ndvi: f64) -> f64 {
    if ndvi >= 0.75 {
        1.2
    } else if ndvi >= 0.60 {
        1.0
    } else {
        0.8
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
