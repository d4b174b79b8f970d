pub mod baseline;
pub mod error;
pub mod practices;
pub mod result;
pub mod store;

pub use baseline::{CropBaseline, DEFAULT_CROP, baseline_for, sequestration_rate_for};
pub use error::{StoreError, VerifyError};
pub use practices::{FallbackField, FarmerPractices, PracticeBonus, PracticeSet};
pub use result::{
    DataSource, HealthStatus, LandAreaVerification, NdviReading, VegetationAnalysis,
    VerificationResult,
};
pub use store::{CreditRecord, CreditStore, MemoryStore};
