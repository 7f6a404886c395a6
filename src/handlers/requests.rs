//! Request handlers: create under a room, read, replace, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::Request;
use crate::service::InventoryService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// POST /api/rooms/:room_id/requests
#[utoipa::path(
    post,
    path = "/api/rooms/{roomId}/requests",
    tag = "requests",
    params(("roomId" = String, Path, description = "Room id; must equal the room in the body")),
    request_body = Request,
    responses(
        (status = 201, description = "Created; id generated when omitted", body = Request),
        (status = 400, description = "Invalid body or room mismatch", body = ErrorBody),
        (status = 409, description = "Request with this id already exists", body = ErrorBody)
    )
)]
pub async fn add_room_request(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    payload: Result<Json<Request>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = payload?;
    let created = InventoryService::add_room_request(&state.repos, &room_id, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/requests/:request_id
#[utoipa::path(
    get,
    path = "/api/requests/{requestId}",
    tag = "requests",
    params(("requestId" = String, Path, description = "Request id")),
    responses(
        (status = 200, description = "The request", body = Request),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let found = InventoryService::get_request(&state.repos, &id).await?;
    Ok((StatusCode::OK, Json(found)))
}

/// PUT /api/requests/:request_id
#[utoipa::path(
    put,
    path = "/api/requests/{requestId}",
    tag = "requests",
    params(("requestId" = String, Path, description = "Request id; must equal the id in the body")),
    request_body = Request,
    responses(
        (status = 200, description = "Replaced", body = Request),
        (status = 400, description = "Invalid body or id mismatch", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Request>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = payload?;
    let updated = InventoryService::update_request(&state.repos, &id, body).await?;
    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /api/requests/:request_id
#[utoipa::path(
    delete,
    path = "/api/requests/{requestId}",
    tag = "requests",
    params(("requestId" = String, Path, description = "Request id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    InventoryService::delete_request(&state.repos, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
