use thiserror::Error;

/// The only condition that aborts a verification. Unknown crop or practice
/// values never reach here — they degrade via the fallback tables instead.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("land area must be a positive number of acres, got {0}")]
    InvalidLandArea(f64),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no credit record with id {0}")]
    UnknownCredit(String),
}
