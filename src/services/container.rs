//! Service Container - Centralized service access.
//!
//! Owns one instance of every application service, built over a single
//! persistence gateway and shared through `Arc`.

use std::sync::Arc;

use super::{UserManager, UserService, WorkEntryManager, WorkEntryService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get work entry service
    fn work_entries(&self) -> Arc<dyn WorkEntryService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    work_entry_service: Arc<dyn WorkEntryService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(
        user_service: Arc<dyn UserService>,
        work_entry_service: Arc<dyn WorkEntryService>,
    ) -> Self {
        Self {
            user_service,
            work_entry_service,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let persistence = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(UserManager::new(persistence.clone())),
            Arc::new(WorkEntryManager::new(persistence)),
        )
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn work_entries(&self) -> Arc<dyn WorkEntryService> {
        self.work_entry_service.clone()
    }
}
