//! SQLite persistence for profiles, health entries, and clinic data.

use crate::Result;
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;
use vitalog_types::{Clinic, DailyEntry, DailySummary, HealthCategory, Profile};

/// SQLite-backed health store.
pub struct HealthStore {
    conn: Mutex<Connection>,
}

impl HealthStore {
    /// Open or create the database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory store. Used by tests and demo mode.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        store.seed_clinics()?;
        Ok(store)
    }

    /// Initialize database schema.
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                full_name TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                details TEXT NOT NULL DEFAULT '{}'
            );

            CREATE INDEX IF NOT EXISTS idx_entries_user_date ON entries(user_id, date);

            CREATE TABLE IF NOT EXISTS clinics (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                rating REAL NOT NULL,
                review_count INTEGER NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Populate the clinic reference table on first open.
    fn seed_clinics(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM clinics", [], |row| row.get(0))?;
        if count == 0 {
            conn.execute_batch(
                r#"
                INSERT INTO clinics (id, name, category, rating, review_count) VALUES
                    (1, 'City Medical Center', 'General', 4.8, 245),
                    (2, 'Heart Care Clinic', 'Cardiology', 4.9, 189),
                    (3, 'NeuroHealth', 'Neurology', 4.7, 156);
                "#,
            )?;
        }
        Ok(())
    }

    /// Look up a profile by email.
    pub fn get_user_by_email(&self, email: &str) -> Result<Option<Profile>> {
        let conn = self.conn.lock().unwrap();
        let profile = conn
            .query_row(
                "SELECT id, email, full_name, created_at FROM profiles WHERE email = ?1",
                params![email],
                row_to_profile,
            )
            .optional()?;
        Ok(profile)
    }

    /// Look up a profile by id.
    pub fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let conn = self.conn.lock().unwrap();
        let profile = conn
            .query_row(
                "SELECT id, email, full_name, created_at FROM profiles WHERE id = ?1",
                params![user_id.to_string()],
                row_to_profile,
            )
            .optional()?;
        Ok(profile)
    }

    /// Create a new profile.
    pub fn create_user(&self, email: &str, full_name: &str) -> Result<Profile> {
        let profile = Profile {
            id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            created_at: Utc::now(),
        };
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO profiles (id, email, full_name, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                profile.id.to_string(),
                profile.email,
                profile.full_name,
                profile.created_at.to_rfc3339(),
            ],
        )?;
        Ok(profile)
    }

    /// Insert a health entry for the given date.
    ///
    /// Sleep entries replace: any existing sleep rows for the same user and
    /// date are deleted first, so at most one survives.
    pub fn add_entry(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        category: HealthCategory,
        details: Map<String, Value>,
    ) -> Result<DailyEntry> {
        let entry = DailyEntry {
            id: Uuid::new_v4(),
            user_id,
            date,
            category,
            details,
        };

        let conn = self.conn.lock().unwrap();
        if category == HealthCategory::Sleep {
            conn.execute(
                "DELETE FROM entries WHERE user_id = ?1 AND date = ?2 AND category = ?3",
                params![user_id.to_string(), date.to_string(), category.as_str()],
            )?;
        }
        conn.execute(
            "INSERT INTO entries (id, user_id, date, category, details) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.id.to_string(),
                entry.user_id.to_string(),
                entry.date.to_string(),
                entry.category.as_str(),
                serde_json::to_string(&entry.details)?,
            ],
        )?;
        Ok(entry)
    }

    /// Delete an entry by id, only when owned by the given user. Returns
    /// whether a row was removed.
    pub fn delete_entry(&self, entry_id: Uuid, user_id: Uuid) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute(
            "DELETE FROM entries WHERE id = ?1 AND user_id = ?2",
            params![entry_id.to_string(), user_id.to_string()],
        )?;
        Ok(affected > 0)
    }

    /// Assemble the daily summary: the user's profile plus the day's entries
    /// grouped by category. Malformed stored rows degrade instead of failing
    /// the whole read.
    pub fn daily_summary(&self, user_id: Uuid, date: NaiveDate) -> Result<DailySummary> {
        let mut summary = DailySummary::empty(user_id, date);
        summary.profile = self.get_profile(user_id)?;

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, category, details FROM entries
             WHERE user_id = ?1 AND date = ?2
             ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![user_id.to_string(), date.to_string()], |row| {
            let id: String = row.get(0)?;
            let category: String = row.get(1)?;
            let details: String = row.get(2)?;
            Ok((id, category, details))
        })?;

        for row in rows {
            let (id, category, details) = row?;
            let Ok(category) = category.parse::<HealthCategory>() else {
                tracing::warn!(target: "vitalog::store", "Skipping entry with unknown category '{}'", category);
                continue;
            };
            let details = match serde_json::from_str::<Value>(&details) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            };
            summary.push(DailyEntry {
                id: id.parse().unwrap_or_else(|_| Uuid::nil()),
                user_id,
                date,
                category,
                details,
            });
        }

        Ok(summary)
    }

    /// List the clinic reference data.
    pub fn list_clinics(&self) -> Result<Vec<Clinic>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, category, rating, review_count FROM clinics ORDER BY id",
        )?;
        let clinics = stmt
            .query_map([], |row| {
                Ok(Clinic {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    category: row.get(2)?,
                    rating: row.get(3)?,
                    review_count: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(clinics)
    }
}

fn row_to_profile(row: &rusqlite::Row<'_>) -> rusqlite::Result<Profile> {
    let id: String = row.get(0)?;
    let created_at: String = row.get(3)?;
    Ok(Profile {
        id: id.parse().unwrap_or_else(|_| Uuid::nil()),
        email: row.get(1)?,
        full_name: row.get(2)?,
        created_at: created_at
            .parse()
            .unwrap_or_else(|_| chrono::DateTime::<Utc>::MIN_UTC),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn create_and_find_user() {
        let store = HealthStore::open_in_memory().unwrap();
        let created = store.create_user("mark@example.com", "Mark").unwrap();

        let found = store.get_user_by_email("mark@example.com").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.full_name, "Mark");
        assert!(store.get_user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn summary_groups_entries_by_category() {
        let store = HealthStore::open_in_memory().unwrap();
        let user = store.create_user("a@b.c", "A").unwrap();

        store
            .add_entry(
                user.id,
                today(),
                HealthCategory::Consumption,
                details(json!({"meals": 2, "water_ml": 1500})),
            )
            .unwrap();
        store
            .add_entry(
                user.id,
                today(),
                HealthCategory::Vitals,
                details(json!({"blood_pressure": "120/80"})),
            )
            .unwrap();

        let summary = store.daily_summary(user.id, today()).unwrap();
        assert_eq!(summary.consumption.len(), 1);
        assert_eq!(summary.vitals.len(), 1);
        assert!(summary.sleep.is_empty());
        assert!(summary.sport.is_empty());
        assert_eq!(summary.profile.as_ref().unwrap().full_name, "A");
    }

    #[test]
    fn summary_only_covers_the_requested_day() {
        let store = HealthStore::open_in_memory().unwrap();
        let user = store.create_user("a@b.c", "A").unwrap();
        let other_day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        store
            .add_entry(user.id, today(), HealthCategory::Sport, details(json!({"minutes": 30})))
            .unwrap();
        store
            .add_entry(user.id, other_day, HealthCategory::Sport, details(json!({"minutes": 60})))
            .unwrap();

        let summary = store.daily_summary(user.id, today()).unwrap();
        assert_eq!(summary.sport.len(), 1);
        assert_eq!(summary.sport[0].detail_f64("minutes"), 30.0);
    }

    #[test]
    fn sleep_entries_replace_instead_of_accumulating() {
        let store = HealthStore::open_in_memory().unwrap();
        let user = store.create_user("a@b.c", "A").unwrap();

        store
            .add_entry(user.id, today(), HealthCategory::Sleep, details(json!({"sleep_hours": 5})))
            .unwrap();
        store
            .add_entry(user.id, today(), HealthCategory::Sleep, details(json!({"sleep_hours": 8})))
            .unwrap();

        let summary = store.daily_summary(user.id, today()).unwrap();
        assert_eq!(summary.sleep.len(), 1);
        assert_eq!(summary.sleep[0].detail_f64("sleep_hours"), 8.0);
    }

    #[test]
    fn delete_requires_matching_owner() {
        let store = HealthStore::open_in_memory().unwrap();
        let owner = store.create_user("a@b.c", "A").unwrap();
        let stranger = store.create_user("x@y.z", "X").unwrap();

        let entry = store
            .add_entry(owner.id, today(), HealthCategory::Sport, details(json!({"minutes": 10})))
            .unwrap();

        assert!(!store.delete_entry(entry.id, stranger.id).unwrap());
        assert!(store.delete_entry(entry.id, owner.id).unwrap());
        assert!(!store.delete_entry(entry.id, owner.id).unwrap());
    }

    #[test]
    fn clinics_are_seeded_once() {
        let store = HealthStore::open_in_memory().unwrap();
        let clinics = store.list_clinics().unwrap();
        assert_eq!(clinics.len(), 3);
        assert_eq!(clinics[0].name, "City Medical Center");
        assert_eq!(clinics[1].category, "Cardiology");
    }

    #[test]
    fn malformed_stored_details_degrade_to_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("health.db");
        let store = HealthStore::open(&path).unwrap();
        let user = store.create_user("a@b.c", "A").unwrap();

        // Corrupt a row behind the store's back.
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "INSERT INTO entries (id, user_id, date, category, details) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    Uuid::new_v4().to_string(),
                    user.id.to_string(),
                    today().to_string(),
                    "consumption",
                    "not json at all",
                ],
            )
            .unwrap();
        }

        let summary = store.daily_summary(user.id, today()).unwrap();
        assert_eq!(summary.consumption.len(), 1);
        assert!(summary.consumption[0].details.is_empty());
        assert_eq!(summary.consumption[0].detail_f64("meals"), 0.0);
    }
}
