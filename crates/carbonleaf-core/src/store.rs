//! Collaborator seam for the credit record store.
//!
//! The verification engine never persists anything itself; callers hand
//! finished results to a [`CreditStore`]. The real store (accounts, access
//! control, dashboards) lives outside this workspace. [`MemoryStore`] is
//! the in-process implementation used by tests and the batch CLI.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::practices::FarmerPractices;
use crate::result::VerificationResult;

/// One credit submission keyed by an opaque id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRecord {
    pub credit_id: String,
    pub practices: FarmerPractices,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationResult>,
}

/// Read/write-by-id access to credit records.
pub trait CreditStore {
    fn fetch(&self, credit_id: &str) -> Result<Option<CreditRecord>, StoreError>;

    /// Attach a finished verification to an existing record.
    fn apply_verification(
        &mut self,
        credit_id: &str,
        result: VerificationResult,
    ) -> Result<(), StoreError>;
}

/// In-process store backed by a HashMap.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, CreditRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: CreditRecord) {
        self.records.insert(record.credit_id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All credit ids, sorted for deterministic iteration.
    pub fn credit_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.records.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Consume the store, yielding records sorted by credit id.
    pub fn into_records(self) -> Vec<CreditRecord> {
        let mut records: Vec<CreditRecord> = self.records.into_values().collect();
        records.sort_by(|a, b| a.credit_id.cmp(&b.credit_id));
        records
    }
}

impl CreditStore for MemoryStore {
    fn fetch(&self, credit_id: &str) -> Result<Option<CreditRecord>, StoreError> {
        Ok(self.records.get(credit_id).cloned())
    }

    fn apply_verification(
        &mut self,
        credit_id: &str,
        result: VerificationResult,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .get_mut(credit_id)
            .ok_or_else(|| StoreError::UnknownCredit(credit_id.to_string()))?;
        debug!(credit_id, verified = result.is_verified, "verification fields applied");
        record.verification = Some(result);
        Ok(())
    }
}
