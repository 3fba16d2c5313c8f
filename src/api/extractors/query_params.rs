//! Query string extractor - Maps malformed query strings to `AppError`.

use axum::{
    async_trait,
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Drop-in for `Query<T>` whose rejection renders as `{"msgError": ...}`.
///
/// Presence and format checks stay in the services; this only covers
/// query strings that cannot be deserialized at all (e.g. a repeated key).
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Rejected query string");
                AppError::invalid_input(e.body_text())
            })?;

        Ok(QueryParams(value))
    }
}
