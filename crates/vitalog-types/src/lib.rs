//! Shared types for the Vitalog health tracker.

mod clinic;
mod entry;
mod score;
mod summary;

pub use clinic::*;
pub use entry::*;
pub use score::*;
pub use summary::*;
