//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ServiceContainer, Services, UserService, WorkEntryService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Work entry service
    pub work_entry_service: Arc<dyn WorkEntryService>,
    /// Database connection (used by the health check)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database handle.
    ///
    /// Services are built through the [`Services`] container over one
    /// persistence gateway.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::new(&container, database)
    }

    /// Create application state from any service container.
    pub fn new(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            user_service: container.users(),
            work_entry_service: container.work_entries(),
            database,
        }
    }
}
