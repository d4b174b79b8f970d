//! Verification output types.
//!
//! A [`VerificationResult`] is a value: constructed once per invocation,
//! never mutated. Field names serialise in camelCase to match the wire
//! contract consumed by the record store and certificate renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::practices::FallbackField;

/// The full outcome of one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_verified: bool,
    /// 0–100.
    pub confidence: u8,
    pub ndvi_data: NdviReading,
    pub land_area_verification: LandAreaVerification,
    pub vegetation_analysis: VegetationAnalysis,
    pub source: DataSource,
    /// Metres per pixel, fixed per source.
    pub image_resolution: f64,
    /// Percent, 0–15.
    pub cloud_coverage: f64,
    pub verification_date: DateTime<Utc>,
    /// Input fields that degraded to defaults during scoring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<FallbackField>,
}

/// The vegetation-index reading backing the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdviReading {
    /// Clamped to [0.10, 0.95], 3 decimals.
    pub value: f64,
    /// Change from the modelled previous reading, 3 decimals.
    pub change: f64,
    /// 0–100.
    pub health_score: u8,
    pub date: DateTime<Utc>,
}

/// Reported vs satellite-detected land area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandAreaVerification {
    pub reported_area: f64,
    pub satellite_detected_area: f64,
    /// Percent, 0–100.
    pub accuracy: f64,
}

/// Crop-level health summary and sequestration estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VegetationAnalysis {
    pub crop_type: String,
    pub health_status: HealthStatus,
    /// Tons CO2 per year across the whole plot.
    pub sequestration_rate: f64,
}

/// Qualitative vegetation health, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl HealthStatus {
    /// Classify an NDVI reading. Thresholds are inclusive lower bounds.
    pub fn from_ndvi(ndvi: f64) -> Self {
        if ndvi >= 0.80 {
            Self::Excellent
        } else if ndvi >= 0.65 {
            Self::Good
        } else if ndvi >= 0.45 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
        }
    }
}

/// Which imagery product the reading is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    #[serde(rename = "Sentinel-2")]
    Sentinel2,
    #[serde(rename = "Landsat-8")]
    Landsat8,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sentinel2 => "Sentinel-2",
            Self::Landsat8 => "Landsat-8",
        }
    }

    /// Ground resolution in metres per pixel, fixed per product.
    pub fn resolution_m(&self) -> f64 {
        match self {
            Self::Sentinel2 => 10.0,
            Self::Landsat8 => 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_result() -> VerificationResult {
        let date = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        VerificationResult {
            is_verified: true,
            confidence: 92,
            ndvi_data: NdviReading {
                value: 0.73,
                change: -0.02,
                health_score: 73,
                date,
            },
            land_area_verification: LandAreaVerification {
                reported_area: 5.0,
                satellite_detected_area: 5.0,
                accuracy: 100.0,
            },
            vegetation_analysis: VegetationAnalysis {
                crop_type: "Rice".into(),
                health_status: HealthStatus::Good,
                sequestration_rate: 4.5,
            },
            source: DataSource::Sentinel2,
            image_resolution: 10.0,
            cloud_coverage: 0.0,
            verification_date: date,
            fallbacks: Vec::new(),
        }
    }

    #[test]
    fn classification_thresholds_are_inclusive() {
        assert_eq!(HealthStatus::from_ndvi(0.80), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_ndvi(0.79), HealthStatus::Good);
        assert_eq!(HealthStatus::from_ndvi(0.65), HealthStatus::Good);
        assert_eq!(HealthStatus::from_ndvi(0.64), HealthStatus::Moderate);
        assert_eq!(HealthStatus::from_ndvi(0.45), HealthStatus::Moderate);
        assert_eq!(HealthStatus::from_ndvi(0.44), HealthStatus::Poor);
        assert_eq!(HealthStatus::from_ndvi(0.10), HealthStatus::Poor);
    }

    #[test]
    fn source_resolution_is_fixed_per_label() {
        assert_eq!(DataSource::Sentinel2.resolution_m(), 10.0);
        assert_eq!(DataSource::Landsat8.resolution_m(), 30.0);
        assert_eq!(DataSource::Sentinel2.label(), "Sentinel-2");
        assert_eq!(DataSource::Landsat8.label(), "Landsat-8");
    }

    #[test]
    fn result_serialises_in_camel_case() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"isVerified\":true"));
        assert!(json.contains("\"ndviData\""));
        assert!(json.contains("\"healthScore\":73"));
        assert!(json.contains("\"satelliteDetectedArea\""));
        assert!(json.contains("\"healthStatus\":\"Good\""));
        assert!(json.contains("\"source\":\"Sentinel-2\""));
        assert!(json.contains("\"verificationDate\""));
    }

    #[test]
    fn empty_fallback_list_is_omitted_from_json() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(!json.contains("fallbacks"));

        let mut with_fallback = sample_result();
        with_fallback.fallbacks.push(FallbackField::CropType);
        let json = serde_json::to_string(&with_fallback).unwrap();
        assert!(json.contains("\"fallbacks\":[\"cropType\"]"));
    }

    #[test]
    fn result_json_round_trips() {
        let original = sample_result();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: VerificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.confidence, original.confidence);
        assert_eq!(parsed.ndvi_data.value, original.ndvi_data.value);
        assert_eq!(
            parsed.vegetation_analysis.health_status,
            original.vegetation_analysis.health_status
        );
        assert_eq!(parsed.source, original.source);
        assert_eq!(parsed.verification_date, original.verification_date);
    }
}
