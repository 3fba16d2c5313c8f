//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories and the persistence gateway

pub mod db;
pub mod persistence;
pub mod repositories;

pub use db::{Database, Migrator};
pub use persistence::{Persistence, PersistenceGateway};
pub use repositories::{UserRepository, UserStore, WorkEntryRepository, WorkEntryStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockUserRepository, MockWorkEntryRepository};
