//! Centralized error handling.
//!
//! Every failure a handler can produce is an [`AppError`]. Client errors are
//! all reported as `400 Bad Request` and differ only by message and shape:
//! `{"msgError": "..."}` for single-message failures and
//! `{"errorsString": [{"field", "message"}]}` for field validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A required parameter is missing, empty or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// The addressed record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Field-level constraints rejected the record
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    /// `endDate` precedes `startDate`
    #[error("{0}")]
    InvalidDateRange(String),

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// One rejected field and the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "The email is not a valid email address")]
    pub message: String,
}

/// Single-message error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(rename = "msgError")]
    pub msg_error: String,
}

/// Field validation error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[serde(rename = "errorsString")]
    pub errors_string: Vec<FieldViolation>,
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidDateRange(_) => "INVALID_DATE_RANGE",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_)
            | AppError::NotFound(_)
            | AppError::Validation(_)
            | AppError::InvalidDateRange(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(code = self.code(), "Request rejected");

        match self {
            AppError::Validation(violations) => (
                status,
                Json(ValidationErrorResponse {
                    errors_string: violations,
                }),
            )
                .into_response(),
            other => (
                status,
                Json(ErrorResponse {
                    msg_error: other.user_message(),
                }),
            )
                .into_response(),
        }
    }
}

/// Flatten validator output into an ordered list of violations.
///
/// Entries are sorted by field name; a field's own errors keep their
/// declaration order. Schema-level errors are reported under `__all__`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let violations = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldViolation {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        AppError::Validation(violations)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(message))
    }
}

/// Convenience constructors
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn invalid_date_range(msg: impl Into<String>) -> Self {
        AppError::InvalidDateRange(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(email(message = "bad email"))]
        email: String,
        #[validate(length(min = 1, message = "name required"))]
        name: String,
    }

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(AppError::invalid_input("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::invalid_date_range("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Validation(vec![]).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("connection string leaked");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_validation_errors_sorted_by_field() {
        let sample = Sample {
            email: "nope".to_string(),
            name: String::new(),
        };
        let err = AppError::from(sample.validate().unwrap_err());

        match err {
            AppError::Validation(violations) => {
                assert_eq!(
                    violations,
                    vec![
                        FieldViolation {
                            field: "email".to_string(),
                            message: "bad email".to_string(),
                        },
                        FieldViolation {
                            field: "name".to_string(),
                            message: "name required".to_string(),
                        },
                    ]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_ok_or_not_found_uses_message() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found("gone").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "gone"));
    }
}
