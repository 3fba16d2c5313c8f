//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{user_handler, work_entry_handler};
use crate::domain::{UserDetail, UserResponse, WorkEntryResponse};
use crate::errors::{ErrorResponse, FieldViolation, ValidationErrorResponse};
use crate::types::{MessageResponse, UserListResponse, WorkEntryListResponse};

/// OpenAPI documentation for the Timesheet API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timesheet API",
        version = "0.1.0",
        description = "CRUD API for users and their work entries",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::test_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Work entry endpoints
        work_entry_handler::list_work_entries,
        work_entry_handler::get_work_entry,
        work_entry_handler::create_work_entry,
        work_entry_handler::update_work_entry,
        work_entry_handler::delete_work_entry,
    ),
    components(
        schemas(
            UserResponse,
            UserDetail,
            WorkEntryResponse,
            UserListResponse,
            WorkEntryListResponse,
            MessageResponse,
            ErrorResponse,
            ValidationErrorResponse,
            FieldViolation,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Work entries", description = "Time-tracking records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/v1/user/test",
            "/v1/users",
            "/v1/user/{id}",
            "/v1/user/create",
            "/v1/user/update/{id}",
            "/v1/user/delete/{id}",
            "/v1/works-entries",
            "/v1/work-entry/{id}",
            "/v1/work-entry/create",
            "/v1/work-entry/update/{id}",
            "/v1/work-entry/delete/{id}",
        ] {
            assert!(paths.iter().any(|p| *p == expected), "missing {}", expected);
        }
    }
}
