//! Reference caller for the verification engine: parses practice
//! submissions from JSON, runs verifications, and prints reports. The
//! engine itself has no I/O surface; this binary is the collaborator that
//! feeds it and persists what comes back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

use carbonleaf_core::{CreditRecord, CreditStore, FarmerPractices, MemoryStore};
use carbonleaf_engine::{Verifier, summarize};

#[derive(Parser)]
#[command(name = "carbonleaf", version, about = "Carbon-credit verification for farm practices")]
struct Cli {
    /// Seed for the satellite-scene sampler, for reproducible runs.
    #[arg(long, global = true, env = "CARBONLEAF_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify a single practices document and print the report.
    Verify {
        /// Path to a FarmerPractices JSON document.
        input: PathBuf,
        /// Emit the raw result as JSON instead of the report card.
        #[arg(long)]
        json: bool,
    },
    /// Verify a batch of credit records and emit the updated records.
    Batch {
        /// Path to a JSON array of {creditId, practices} records.
        input: PathBuf,
        /// Write the updated records here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut verifier = match cli.seed {
        Some(seed) => Verifier::seeded(seed),
        None => Verifier::new(),
    };

    match cli.command {
        Command::Verify { input, json } => {
            let practices = load_practices(&input)?;
            let result = verifier.verify(&practices)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", summarize(&result));
            }
        }
        Command::Batch { input, out } => {
            let mut store = MemoryStore::new();
            for record in load_records(&input)? {
                store.insert(record);
            }

            for id in store.credit_ids() {
                let Some(record) = store.fetch(&id)? else { continue };
                match verifier.verify(&record.practices) {
                    Ok(result) => store.apply_verification(&id, result)?,
                    Err(err) => warn!(credit_id = %id, %err, "skipping record with invalid input"),
                }
            }

            let rendered = serde_json::to_string_pretty(&store.into_records())?;
            match out {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
    }

    Ok(())
}

fn load_practices(path: &Path) -> anyhow::Result<FarmerPractices> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid practices document", path.display()))
}

fn load_records(path: &Path) -> anyhow::Result<Vec<CreditRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid credit record list", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_camel_case_practices_document() {
        let file = write_temp(
            r#"{
                "cropType": "Rice",
                "landArea": 5.0,
                "location": "Rampur, Uttar Pradesh",
                "practices": {
                    "fertilizer": "Organic Manure",
                    "irrigation": "Drip Irrigation",
                    "seedType": "Organic Seeds",
                    "soilHealth": "Excellent"
                }
            }"#,
        );

        let practices = load_practices(file.path()).unwrap();
        assert_eq!(practices.crop_type, "Rice");
        assert_eq!(practices.land_area, 5.0);
        assert_eq!(practices.practices.soil_health, "Excellent");
    }

    #[test]
    fn rejects_a_malformed_document_with_the_path_in_the_error() {
        let file = write_temp("{\"cropType\": 12}");
        let err = load_practices(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a valid practices document"));
    }

    #[test]
    fn loads_a_record_batch() {
        let file = write_temp(
            r#"[
                {
                    "creditId": "cr-001",
                    "practices": {
                        "cropType": "Wheat",
                        "landArea": 3.0,
                        "location": "Nashik",
                        "practices": {
                            "fertilizer": "Compost",
                            "irrigation": "Sprinkler",
                            "seedType": "High Yield Variety",
                            "soilHealth": "Good"
                        }
                    }
                }
            ]"#,
        );

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].credit_id, "cr-001");
        assert!(records[0].verification.is_none());
    }

    #[test]
    fn batch_records_round_trip_through_the_store() {
        let file = write_temp(
            r#"[
                {
                    "creditId": "cr-002",
                    "practices": {
                        "cropType": "Agroforestry",
                        "landArea": 10.0,
                        "location": "Wayanad",
                        "practices": {
                            "fertilizer": "Organic Manure",
                            "irrigation": "Rainwater Harvesting",
                            "seedType": "Drought Resistant",
                            "soilHealth": "Excellent"
                        }
                    }
                }
            ]"#,
        );

        let mut store = MemoryStore::new();
        for record in load_records(file.path()).unwrap() {
            store.insert(record);
        }

        let mut verifier = Verifier::seeded(7);
        for id in store.credit_ids() {
            let record = store.fetch(&id).unwrap().unwrap();
            let result = verifier.verify(&record.practices).unwrap();
            store.apply_verification(&id, result).unwrap();
        }

        let records = store.into_records();
        let verification = records[0].verification.as_ref().expect("attached");
        // Agroforestry with every bonus saturates the NDVI ceiling.
        assert_eq!(verification.ndvi_data.value, 0.95);
    }
}
