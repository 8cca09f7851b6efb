use std::sync::Arc;

use shipdeck_core::registry::ProjectRegistry;
use shipdeck_db::{DbPool, PgProjectStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the health check.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Project registry backed by the same pool.
    pub projects: ProjectRegistry<PgProjectStore>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let projects = ProjectRegistry::new(PgProjectStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            projects,
        }
    }
}
