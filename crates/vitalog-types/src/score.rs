//! Derived wellness score.

use serde::{Deserialize, Serialize};

/// Placeholder shown when no blood pressure was logged.
pub const BP_PLACEHOLDER: &str = "-";

/// Daily wellness score with the aggregates it was computed from.
///
/// Purely a function of a [`crate::DailySummary`]; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Wellness score in [0, 100].
    pub score: u8,
    /// Meals summed across the day's consumption entries.
    pub total_meals: u32,
    /// Water in milliliters summed across the day's consumption entries.
    pub total_water_ml: u32,
    /// Hours from the first sleep entry (replace-on-write keeps at most one).
    pub sleep_hours: f64,
    /// Activity minutes summed across the day's sport entries.
    pub sport_minutes: u32,
    /// Blood pressure from the first vitals entry, or [`BP_PLACEHOLDER`].
    pub blood_pressure: String,
}
