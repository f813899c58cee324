//! Clinic reference data.

use serde::{Deserialize, Serialize};

/// A medical clinic a user can be pointed to. Static reference data,
/// read-only for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinic {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub review_count: u32,
}
