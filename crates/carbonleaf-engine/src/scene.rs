//! Sampled satellite-scene conditions and the clock seam.
//!
//! The model stands in for a remote-sensing pipeline: short-term
//! variability, the previous reading, area-detection error, and scene
//! metadata are all drawn from bounded uniform distributions. Drawing them
//! into one value up-front keeps the scoring core deterministic.

use chrono::{DateTime, Utc};
use rand::Rng;

use carbonleaf_core::DataSource;

/// Everything the verification draw samples from its randomness source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConditions {
    /// Short-term NDVI variability, uniform in [-0.05, +0.05].
    pub seasonal_shift: f64,
    /// Previous reading as a fraction of baseline, uniform in [0.85, 1.00].
    pub prior_ratio: f64,
    /// Detected-over-reported area ratio, uniform in [0.95, 1.05].
    pub area_factor: f64,
    /// Imagery product, uniform pick.
    pub source: DataSource,
    /// Percent, uniform in [0, 15].
    pub cloud_coverage: f64,
}

impl SceneConditions {
    /// Draw a scene from the given randomness source.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SceneConditions {
            seasonal_shift: rng.gen_range(-0.05..=0.05),
            prior_ratio: rng.gen_range(0.85..=1.0),
            area_factor: rng.gen_range(0.95..=1.05),
            source: if rng.gen_bool(0.5) {
                DataSource::Sentinel2
            } else {
                DataSource::Landsat8
            },
            cloud_coverage: rng.gen_range(0.0..=15.0),
        }
    }

    /// The zero-noise scene: no seasonal shift, previous reading equal to
    /// baseline, exact area detection, clear sky.
    pub fn nominal() -> Self {
        SceneConditions {
            seasonal_shift: 0.0,
            prior_ratio: 1.0,
            area_factor: 1.0,
            source: DataSource::Sentinel2,
            cloud_coverage: 0.0,
        }
    }
}

/// Injectable timestamp source.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
