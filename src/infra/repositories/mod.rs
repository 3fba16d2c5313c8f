//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod user_repository;
mod work_entry_repository;

pub use user_repository::{UserRepository, UserStore};
pub use work_entry_repository::{WorkEntryRepository, WorkEntryStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use work_entry_repository::MockWorkEntryRepository;
