//! Health entry types and detail coercion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Category of a self-reported health entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    /// Meals and liquids for the day.
    Consumption,
    /// Sleep duration. At most one entry per day (replace-on-write).
    Sleep,
    /// Vital signs (blood pressure, heart rate).
    Vitals,
    /// Physical activity.
    Sport,
}

impl HealthCategory {
    /// Stable name used as the storage key and in request payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCategory::Consumption => "consumption",
            HealthCategory::Sleep => "sleep",
            HealthCategory::Vitals => "vitals",
            HealthCategory::Sport => "sport",
        }
    }
}

impl std::str::FromStr for HealthCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consumption" => Ok(HealthCategory::Consumption),
            "sleep" => Ok(HealthCategory::Sleep),
            "vitals" => Ok(HealthCategory::Vitals),
            "sport" => Ok(HealthCategory::Sport),
            other => Err(format!("unknown health category: '{}'", other)),
        }
    }
}

/// One user-submitted record of a health category for a specific date.
///
/// The `details` object holds free-form key/value pairs. Well-known keys:
/// `meals` and `water_ml` (consumption), `sleep_hours` (sleep),
/// `blood_pressure` (vitals), `minutes` (sport). Values may arrive as JSON
/// numbers or as strings; readers coerce and never fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub category: HealthCategory,
    #[serde(default)]
    pub details: Map<String, Value>,
}

impl DailyEntry {
    /// Read a numeric detail field, treating absent, null, or unparsable
    /// values as zero. Numeric strings ("7.5") parse.
    pub fn detail_f64(&self, key: &str) -> f64 {
        match self.details.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Read a string detail field, if present and non-empty.
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        match self.details.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry_with(details: Value) -> DailyEntry {
        DailyEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            category: HealthCategory::Consumption,
            details: details.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn detail_f64_coerces_numbers_and_strings() {
        let e = entry_with(json!({"meals": 2, "water_ml": "1500"}));
        assert_eq!(e.detail_f64("meals"), 2.0);
        assert_eq!(e.detail_f64("water_ml"), 1500.0);
    }

    #[test]
    fn detail_f64_defaults_to_zero() {
        let e = entry_with(json!({"meals": null, "water_ml": "lots", "x": []}));
        assert_eq!(e.detail_f64("meals"), 0.0);
        assert_eq!(e.detail_f64("water_ml"), 0.0);
        assert_eq!(e.detail_f64("x"), 0.0);
        assert_eq!(e.detail_f64("missing"), 0.0);
    }

    #[test]
    fn category_round_trips_through_str() {
        for cat in [
            HealthCategory::Consumption,
            HealthCategory::Sleep,
            HealthCategory::Vitals,
            HealthCategory::Sport,
        ] {
            assert_eq!(cat.as_str().parse::<HealthCategory>().unwrap(), cat);
        }
        assert!("breakfast".parse::<HealthCategory>().is_err());
    }
}
