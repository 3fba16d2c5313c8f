//! Application services layer - Use cases and business logic.
//!
//! Services receive raw request input, run presence checks and domain
//! validation, and only then reach the persistence gateway. A rejected
//! request never performs a write.

pub mod container;
mod user_service;
mod work_entry_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use user_service::{UserManager, UserService};
pub use work_entry_service::{WorkEntryManager, WorkEntryService};

use chrono::{DateTime, Utc};

use crate::config::ERR_INVALID_DATE;
use crate::domain::parse_timestamp;
use crate::errors::{AppError, AppResult};

/// Drop absent and blank parameters
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a numeric record ID taken from the path or query
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn parse_date(raw: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(raw).ok_or_else(|| {
        tracing::warn!(value = raw, "Unparsable date parameter");
        AppError::invalid_input(ERR_INVALID_DATE)
    })
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for service unit tests.

    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::{default_roles, User, WorkEntry};
    use crate::infra::{
        MockUserRepository, MockWorkEntryRepository, PersistenceGateway, UserRepository,
        WorkEntryRepository,
    };

    /// Gateway over mock repositories
    pub struct TestPersistence {
        pub users: Arc<MockUserRepository>,
        pub work_entries: Arc<MockWorkEntryRepository>,
    }

    impl TestPersistence {
        pub fn new(users: MockUserRepository, work_entries: MockWorkEntryRepository) -> Self {
            Self {
                users: Arc::new(users),
                work_entries: Arc::new(work_entries),
            }
        }
    }

    impl PersistenceGateway for TestPersistence {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn work_entries(&self) -> Arc<dyn WorkEntryRepository> {
            self.work_entries.clone()
        }
    }

    pub fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 8, 0, 0).unwrap()
    }

    pub fn sample_user(id: i32) -> User {
        User {
            id,
            name: "jaime".to_string(),
            email: "prueba@gmail.com".to_string(),
            roles: default_roles(),
            created_at: at(1),
            updated_at: at(1),
            deleted_at: None,
        }
    }

    pub fn sample_entry(id: i32, user_id: i32) -> WorkEntry {
        WorkEntry {
            id,
            user: sample_user(user_id),
            start_date: at(2),
            end_date: Some(at(3)),
            created_at: at(1),
            updated_at: at(1),
            deleted_at: None,
        }
    }
}
