//! Timesheet API - REST CRUD service for users and their work entries
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration, constants and client messages
//! - **domain**: Core entities (`User`, `WorkEntry`) and their rules
//! - **services**: Use cases: input checks, validation, persistence calls
//! - **infra**: Database, migrations, repositories, persistence gateway
//! - **api**: HTTP handlers, routes and OpenAPI document
//! - **types**: Response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{User, WorkEntry};
pub use errors::{AppError, AppResult};
pub use infra::Database;
