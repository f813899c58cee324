//! Error types for Vitalog.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum VitalogError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
