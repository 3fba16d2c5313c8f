//! User handlers.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::{PathParam, QueryParams};
use crate::api::AppState;
use crate::config::{MSG_USER_CREATED, MSG_USER_DELETED, MSG_USER_TEST, MSG_USER_UPDATED};
use crate::domain::{UserParams, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, DataResponse, MessageResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/user/test", get(test_user))
        .route("/v1/users", get(list_users))
        .route("/v1/user/create", post(create_user))
        .route("/v1/user/update/:id", put(update_user))
        .route("/v1/user/delete/:id", delete(delete_user))
        .route("/v1/user/:id", get(get_user))
}

/// Fixed acknowledgment used to check the API is reachable
#[utoipa::path(
    get,
    path = "/v1/user/test",
    tag = "Users",
    responses(
        (status = 200, description = "API reachable", body = MessageResponse)
    )
)]
pub async fn test_user() -> MessageResponse {
    MessageResponse::new(MSG_USER_TEST)
}

/// List all users
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users ordered by ID", body = UserListResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<DataResponse<UserResponse>> {
    let users = state.user_service.list_users().await?;
    Ok(DataResponse::many(
        users.into_iter().map(UserResponse::from).collect(),
    ))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/v1/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "One-element list with the user", body = UserListResponse),
        (status = 400, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> AppResult<DataResponse<UserResponse>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(DataResponse::one(UserResponse::from(user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/v1/user/create",
    tag = "Users",
    params(UserParams),
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Missing email or name (`msgError`) or rejected fields (`errorsString`)", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UserParams>,
) -> AppResult<Created> {
    state.user_service.create_user(params).await?;
    Ok(Created(MessageResponse::new(MSG_USER_CREATED)))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/v1/user/update/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID"),
        UserParams
    ),
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Bad input, user not found (`msgError`) or rejected fields (`errorsString`)", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    QueryParams(params): QueryParams<UserParams>,
) -> AppResult<MessageResponse> {
    state.user_service.update_user(&id, params).await?;
    Ok(MessageResponse::new(MSG_USER_UPDATED))
}

/// Delete a user and their work entries
#[utoipa::path(
    delete,
    path = "/v1/user/delete/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Bad ID or user not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> AppResult<MessageResponse> {
    state.user_service.delete_user(&id).await?;
    Ok(MessageResponse::new(MSG_USER_DELETED))
}
