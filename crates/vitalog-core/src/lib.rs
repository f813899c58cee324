//! Core logic for Vitalog: score aggregation, advice generation, and the
//! SQLite-backed health store.

mod advice;
mod error;
mod score;
mod store;

pub use advice::{generate_advice, AdviceMode};
pub use error::VitalogError;
pub use score::compute_score;
pub use store::HealthStore;

/// Result type for Vitalog operations.
pub type Result<T> = std::result::Result<T, VitalogError>;
