//! Verification engine: maps a farmer's reported practices to an NDVI
//! estimate, an area plausibility check, a confidence score, and a verdict.
//!
//! All randomness is drawn up-front into a [`SceneConditions`] value and the
//! clock sits behind a trait, so the scoring core ([`verify_scene`]) is a
//! pure function and every test can pin its inputs exactly.

pub mod scene;
pub mod summary;
pub mod verifier;

pub use scene::{Clock, SceneConditions, SystemClock};
pub use summary::summarize;
pub use verifier::{Verifier, verify_scene};
