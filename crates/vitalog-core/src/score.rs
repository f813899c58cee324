//! Daily wellness score aggregation.
//!
//! Turns one day's raw entries into a 0-100 score plus the display
//! aggregates. Each category contributes a component clamped to its maximum,
//! so the sum never leaves [0, 100]:
//!
//! - water:  (ml / 2000) x 25, capped at 25
//! - meals:  (count / 3) x 20, capped at 20
//! - sleep:  step function, 30 / 15 / 5 / 0
//! - sport:  (minutes / 30) x 15, capped at 15
//! - vitals: flat 10 when anything was logged

use vitalog_types::{DailyEntry, DailySummary, ScoreBreakdown, BP_PLACEHOLDER};

const WATER_TARGET_ML: f64 = 2000.0;
const MEAL_TARGET: f64 = 3.0;
const SPORT_TARGET_MIN: f64 = 30.0;

/// Compute the wellness score for one day. Pure and infallible: missing or
/// malformed detail values read as zero and only degrade the score.
pub fn compute_score(summary: &DailySummary) -> ScoreBreakdown {
    let total_meals = sum_detail(&summary.consumption, "meals");
    let total_water_ml = sum_detail(&summary.consumption, "water_ml");
    let sport_minutes = sum_detail(&summary.sport, "minutes");

    // Replace-on-write keeps at most one sleep entry per day; read the first.
    let sleep_hours = summary
        .sleep
        .first()
        .map(|e| e.detail_f64("sleep_hours").max(0.0))
        .unwrap_or(0.0);

    let blood_pressure = summary
        .vitals
        .first()
        .and_then(|e| e.detail_str("blood_pressure"))
        .unwrap_or(BP_PLACEHOLDER)
        .to_string();

    let water_score = (f64::from(total_water_ml) / WATER_TARGET_ML * 25.0).min(25.0);
    let meal_score = (f64::from(total_meals) / MEAL_TARGET * 20.0).min(20.0);
    let sport_score = (f64::from(sport_minutes) / SPORT_TARGET_MIN * 15.0).min(15.0);
    let sleep_score = match sleep_hours {
        h if h >= 7.0 => 30.0,
        h if h >= 5.0 => 15.0,
        h if h > 0.0 => 5.0,
        _ => 0.0,
    };
    let vitals_score = if summary.vitals.is_empty() { 0.0 } else { 10.0 };

    let total = water_score + meal_score + sleep_score + sport_score + vitals_score;

    ScoreBreakdown {
        score: total as u8,
        total_meals,
        total_water_ml,
        sleep_hours,
        sport_minutes,
        blood_pressure,
    }
}

/// Sum a numeric detail field across entries, truncating each value to a
/// whole non-negative amount the way the entry forms submit them.
fn sum_detail(entries: &[DailyEntry], key: &str) -> u32 {
    entries
        .iter()
        .map(|e| e.detail_f64(key).max(0.0) as u32)
        .sum()
}
