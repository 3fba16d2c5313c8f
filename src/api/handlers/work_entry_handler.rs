//! Work entry handlers.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::{PathParam, QueryParams};
use crate::api::AppState;
use crate::config::{MSG_ENTRY_CREATED, MSG_ENTRY_DELETED, MSG_ENTRY_UPDATED};
use crate::domain::{CreateWorkEntryParams, UpdateWorkEntryParams, WorkEntryResponse};
use crate::errors::AppResult;
use crate::types::{Created, DataResponse, MessageResponse};

/// Create work entry routes
pub fn work_entry_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/works-entries", get(list_work_entries))
        .route("/v1/work-entry/create", post(create_work_entry))
        .route("/v1/work-entry/update/:id", put(update_work_entry))
        .route("/v1/work-entry/delete/:id", delete(delete_work_entry))
        .route("/v1/work-entry/:id", get(get_work_entry))
}

/// List all work entries
#[utoipa::path(
    get,
    path = "/v1/works-entries",
    tag = "Work entries",
    responses(
        (status = 200, description = "All entries with their users", body = WorkEntryListResponse)
    )
)]
pub async fn list_work_entries(
    State(state): State<AppState>,
) -> AppResult<DataResponse<WorkEntryResponse>> {
    let entries = state.work_entry_service.list_work_entries().await?;
    Ok(DataResponse::many(
        entries.into_iter().map(WorkEntryResponse::from).collect(),
    ))
}

/// Get work entry by ID
#[utoipa::path(
    get,
    path = "/v1/work-entry/{id}",
    tag = "Work entries",
    params(
        ("id" = String, Path, description = "Work entry ID")
    ),
    responses(
        (status = 200, description = "One-element list with the entry", body = WorkEntryListResponse),
        (status = 400, description = "Entry not found", body = ErrorResponse)
    )
)]
pub async fn get_work_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> AppResult<DataResponse<WorkEntryResponse>> {
    let entry = state.work_entry_service.get_work_entry(&id).await?;
    Ok(DataResponse::one(WorkEntryResponse::from(entry)))
}

/// Create a work entry
#[utoipa::path(
    post,
    path = "/v1/work-entry/create",
    tag = "Work entries",
    params(CreateWorkEntryParams),
    responses(
        (status = 201, description = "Entry created", body = MessageResponse),
        (status = 400, description = "Bad input, reversed dates or unknown user", body = ErrorResponse)
    )
)]
pub async fn create_work_entry(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<CreateWorkEntryParams>,
) -> AppResult<Created> {
    state.work_entry_service.create_work_entry(params).await?;
    Ok(Created(MessageResponse::new(MSG_ENTRY_CREATED)))
}

/// Update a work entry's dates
#[utoipa::path(
    put,
    path = "/v1/work-entry/update/{id}",
    tag = "Work entries",
    params(
        ("id" = String, Path, description = "Work entry ID"),
        UpdateWorkEntryParams
    ),
    responses(
        (status = 200, description = "Entry updated", body = MessageResponse),
        (status = 400, description = "Bad input, reversed dates or entry not found", body = ErrorResponse)
    )
)]
pub async fn update_work_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    QueryParams(params): QueryParams<UpdateWorkEntryParams>,
) -> AppResult<MessageResponse> {
    state
        .work_entry_service
        .update_work_entry(&id, params)
        .await?;
    Ok(MessageResponse::new(MSG_ENTRY_UPDATED))
}

/// Delete a work entry
#[utoipa::path(
    delete,
    path = "/v1/work-entry/delete/{id}",
    tag = "Work entries",
    params(
        ("id" = String, Path, description = "Work entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 400, description = "Bad ID or entry not found", body = ErrorResponse)
    )
)]
pub async fn delete_work_entry(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> AppResult<MessageResponse> {
    state.work_entry_service.delete_work_entry(&id).await?;
    Ok(MessageResponse::new(MSG_ENTRY_DELETED))
}
