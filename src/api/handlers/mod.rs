//! HTTP request handlers.

pub mod user_handler;
pub mod work_entry_handler;

pub use user_handler::user_routes;
pub use work_entry_handler::work_entry_routes;
