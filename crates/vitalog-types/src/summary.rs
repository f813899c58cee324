//! Per-user, per-date aggregate views.

use crate::{DailyEntry, HealthCategory};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// All entries for one user on one date, grouped by category.
///
/// Derived on every read, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub profile: Option<Profile>,
    pub consumption: Vec<DailyEntry>,
    pub sleep: Vec<DailyEntry>,
    pub vitals: Vec<DailyEntry>,
    pub sport: Vec<DailyEntry>,
}

impl DailySummary {
    /// Summary with no entries, used when the store read fails or the user
    /// has logged nothing yet.
    pub fn empty(user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            user_id,
            date,
            profile: None,
            consumption: Vec::new(),
            sleep: Vec::new(),
            vitals: Vec::new(),
            sport: Vec::new(),
        }
    }

    /// Append an entry to the list matching its category.
    pub fn push(&mut self, entry: DailyEntry) {
        match entry.category {
            HealthCategory::Consumption => self.consumption.push(entry),
            HealthCategory::Sleep => self.sleep.push(entry),
            HealthCategory::Vitals => self.vitals.push(entry),
            HealthCategory::Sport => self.sport.push(entry),
        }
    }
}
