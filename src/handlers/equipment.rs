//! Equipment handlers: create under a room, read, replace, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::Equipment;
use crate::service::InventoryService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// POST /api/rooms/:room_id/equipment
#[utoipa::path(
    post,
    path = "/api/rooms/{roomId}/equipment",
    tag = "equipment",
    params(("roomId" = String, Path, description = "Room id; must equal the room in the body")),
    request_body = Equipment,
    responses(
        (status = 201, description = "Created; id generated when omitted", body = Equipment),
        (status = 400, description = "Invalid body or room mismatch", body = ErrorBody),
        (status = 409, description = "Equipment with this id already exists", body = ErrorBody)
    )
)]
pub async fn add_room_equipment(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    payload: Result<Json<Equipment>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = payload?;
    let created = InventoryService::add_room_equipment(&state.repos, &room_id, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/equipment/:equipment_id
#[utoipa::path(
    get,
    path = "/api/equipment/{equipmentId}",
    tag = "equipment",
    params(("equipmentId" = String, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "The equipment", body = Equipment),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let found = InventoryService::get_equipment(&state.repos, &id).await?;
    Ok((StatusCode::OK, Json(found)))
}

/// PUT /api/equipment/:equipment_id
#[utoipa::path(
    put,
    path = "/api/equipment/{equipmentId}",
    tag = "equipment",
    params(("equipmentId" = String, Path, description = "Equipment id; must equal the id in the body")),
    request_body = Equipment,
    responses(
        (status = 200, description = "Replaced", body = Equipment),
        (status = 400, description = "Invalid body or id mismatch", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Equipment>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = payload?;
    let updated = InventoryService::update_equipment(&state.repos, &id, body).await?;
    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /api/equipment/:equipment_id
#[utoipa::path(
    delete,
    path = "/api/equipment/{equipmentId}",
    tag = "equipment",
    params(("equipmentId" = String, Path, description = "Equipment id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    InventoryService::delete_equipment(&state.repos, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
