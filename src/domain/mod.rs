//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod user;
pub mod work_entry;

pub use user::{default_roles, NewUser, User, UserDetail, UserParams, UserResponse};
pub use work_entry::{
    dates_in_order, parse_timestamp, CreateWorkEntryParams, NewWorkEntry, UpdateWorkEntryParams,
    WorkEntry, WorkEntryResponse,
};
