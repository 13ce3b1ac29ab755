//! Application state
//!
//! Shared state for the Axum application: the store and the configuration.

use std::sync::Arc;

use vidtube_common::AppConfig;
use vidtube_db::Database;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: Arc<Database>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Arc<Database>, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Shared store handle; each handler wraps it in its own unit of work.
    pub fn db(&self) -> Arc<Database> {
        self.db.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The externally supplied admin credential.
    pub fn admin_token(&self) -> &str {
        &self.config.admin.token
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &"Database")
            .field("config", &"AppConfig")
            .finish()
    }
}
