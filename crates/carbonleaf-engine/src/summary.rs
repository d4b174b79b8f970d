//! Human-readable report rendering for a finished verification.
//!
//! Pure formatting: no decision logic, no field mutation. The layout is a
//! grouped vertical card so the figures backing the verdict read in the
//! order the engine derived them.

use std::fmt::Display;

use carbonleaf_core::VerificationResult;

/// Render a verification result as a sectioned text report.
pub fn summarize(result: &VerificationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Carbon Credit Verification — {} ===\n\n",
        result.vegetation_analysis.crop_type
    ));

    section(&mut out, "Verdict");
    row(&mut out, "verified", if result.is_verified { "yes" } else { "no" });
    row(&mut out, "confidence", format!("{}%", result.confidence));
    out.push('\n');

    section(&mut out, "NDVI");
    row(&mut out, "value", format!("{:.3}", result.ndvi_data.value));
    row(&mut out, "change", format!("{:+.3}", result.ndvi_data.change));
    row(
        &mut out,
        "health score",
        format!("{}/100", result.ndvi_data.health_score),
    );
    row(
        &mut out,
        "health status",
        result.vegetation_analysis.health_status.as_str(),
    );
    out.push('\n');

    section(&mut out, "Land Area");
    row(
        &mut out,
        "reported",
        format!("{:.2} acres", result.land_area_verification.reported_area),
    );
    row(
        &mut out,
        "satellite detected",
        format!(
            "{:.2} acres",
            result.land_area_verification.satellite_detected_area
        ),
    );
    row(
        &mut out,
        "accuracy",
        format!("{:.2}%", result.land_area_verification.accuracy),
    );
    out.push('\n');

    section(&mut out, "Vegetation");
    row(&mut out, "crop type", &result.vegetation_analysis.crop_type);
    row(
        &mut out,
        "sequestration",
        format!(
            "{:.2} t CO2/yr",
            result.vegetation_analysis.sequestration_rate
        ),
    );
    out.push('\n');

    section(&mut out, "Scene");
    row(&mut out, "source", result.source.label());
    row(&mut out, "resolution", format!("{:.1} m", result.image_resolution));
    row(
        &mut out,
        "cloud coverage",
        format!("{:.2}%", result.cloud_coverage),
    );
    row(
        &mut out,
        "verified at",
        result.verification_date.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    if !result.fallbacks.is_empty() {
        out.push('\n');
        section(&mut out, "Diagnostics");
        let fields: Vec<&str> = result.fallbacks.iter().map(|f| f.as_str()).collect();
        row(&mut out, "defaulted fields", fields.join(", "));
    }

    out
}

fn section(out: &mut String, header: &str) {
    out.push_str(header);
    out.push('\n');
}

fn row(out: &mut String, label: &str, value: impl Display) {
    out.push_str(&format!("  {:<22} {}\n", label, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneConditions;
    use crate::verifier::verify_scene;
    use carbonleaf_core::{FarmerPractices, PracticeSet};
    use chrono::{TimeZone, Utc};

    fn sample(soil: &str) -> VerificationResult {
        let input = FarmerPractices {
            crop_type: "Rice".into(),
            land_area: 5.0,
            location: "Rampur".into(),
            practices: PracticeSet {
                fertilizer: "Organic Manure".into(),
                irrigation: "Drip Irrigation".into(),
                seed_type: "Organic Seeds".into(),
                soil_health: soil.into(),
            },
        };
        let now = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        verify_scene(&input, &SceneConditions::nominal(), now).unwrap()
    }

    #[test]
    fn summarize_is_a_pure_function_of_the_result() {
        let result = sample("Excellent");
        assert_eq!(summarize(&result), summarize(&result));
    }

    #[test]
    fn report_carries_the_figures_behind_the_verdict() {
        let report = summarize(&sample("Excellent"));
        assert!(report.starts_with("=== Carbon Credit Verification — Rice ==="));

        let has_row = |label: &str, value: &str| {
            report.lines().any(|line| {
                let line = line.trim_start();
                line.starts_with(label) && line.ends_with(value)
            })
        };
        assert!(has_row("verified", "yes"));
        // 0.75 baseline + 0.22 bonus clamps to the reporting ceiling.
        assert!(has_row("value", "0.950"));
        assert!(has_row("source", "Sentinel-2"));
        assert!(has_row("verified at", "2026-08-05 12:00:00 UTC"));
    }

    #[test]
    fn diagnostics_section_appears_only_on_fallback() {
        let clean = summarize(&sample("Excellent"));
        assert!(!clean.contains("Diagnostics"));

        let degraded = summarize(&sample("Swampy"));
        assert!(degraded.contains("Diagnostics"));
        assert!(degraded.contains("soilHealth"));
    }

    #[test]
    fn summarize_does_not_alter_the_result() {
        let result = sample("Good");
        let before = serde_json::to_string(&result);
        let _ = summarize(&result);
        assert_eq!(before.unwrap(), serde_json::to_string(&result).unwrap());
    }
}
