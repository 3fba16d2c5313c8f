//! Persistence gateway.
//!
//! Centralizes access to the repositories so services depend on one handle
//! instead of wiring every store themselves. Each repository write is a single
//! statement and commits on its own.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{UserRepository, UserStore, WorkEntryRepository, WorkEntryStore};

/// Repository access for the service layer.
pub trait PersistenceGateway: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get work entry repository
    fn work_entries(&self) -> Arc<dyn WorkEntryRepository>;
}

/// Database-backed gateway
pub struct Persistence {
    user_repo: Arc<UserStore>,
    work_entry_repo: Arc<WorkEntryStore>,
}

impl Persistence {
    /// Create the gateway over a shared connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            work_entry_repo: Arc::new(WorkEntryStore::new(db)),
        }
    }
}

impl PersistenceGateway for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn work_entries(&self) -> Arc<dyn WorkEntryRepository> {
        self.work_entry_repo.clone()
    }
}
