//! Custom extractors that reject with the application's JSON error body.

mod path_param;
mod query_params;

pub use path_param::PathParam;
pub use query_params::QueryParams;
