use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// List envelope; single-record reads are wrapped in a one-element list
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    UserListResponse = DataResponse<crate::domain::UserResponse>,
    WorkEntryListResponse = DataResponse<crate::domain::WorkEntryResponse>
)]
pub struct DataResponse<T: Serialize> {
    pub data: Vec<T>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn many(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn one(item: T) -> Self {
        Self { data: vec![item] }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "The user has been successfully created")]
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

/// Created response helper (201 with an acknowledgment message)
pub struct Created(pub MessageResponse);

impl IntoResponse for Created {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record_is_wrapped_in_list() {
        let body = serde_json::to_value(DataResponse::one("x")).unwrap();
        assert_eq!(body, serde_json::json!({ "data": ["x"] }));
    }

    #[test]
    fn test_created_status() {
        let response = Created(MessageResponse::new("done")).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
