//! Shared application state.

use crate::config::Config;
use std::sync::Arc;
use vitalog_core::HealthStore;

/// Shared application state.
pub struct AppState {
    pub store: Arc<HealthStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> vitalog_core::Result<Self> {
        let store = Arc::new(HealthStore::open(&config.db_path)?);
        Ok(Self { store, config })
    }
}
