//! Department listing and the nested per-department views.

use crate::error::{AppError, ErrorBody};
use crate::model::{Department, Room};
use crate::service::{DepartmentEquipment, DepartmentRequests, InventoryService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// GET /api/departments
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = "departments",
    responses(
        (status = 200, description = "All departments", body = Vec<Department>),
        (status = 502, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let departments = InventoryService::list_departments(&state.repos).await?;
    Ok((StatusCode::OK, Json(departments)))
}

/// GET /api/departments/:department_id/rooms
#[utoipa::path(
    get,
    path = "/api/departments/{departmentId}/rooms",
    tag = "departments",
    params(("departmentId" = String, Path, description = "Department id")),
    responses(
        (status = 200, description = "Rooms of the department", body = Vec<Room>),
        (status = 404, description = "Department not found", body = ErrorBody)
    )
)]
pub async fn department_rooms(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rooms = InventoryService::department_rooms(&state.repos, &department_id).await?;
    Ok((StatusCode::OK, Json(rooms)))
}

/// GET /api/departments/:department_id/equipment
#[utoipa::path(
    get,
    path = "/api/departments/{departmentId}/equipment",
    tag = "departments",
    params(("departmentId" = String, Path, description = "Department id")),
    responses(
        (status = 200, description = "Equipment grouped by room", body = DepartmentEquipment),
        (status = 404, description = "Department not found", body = ErrorBody),
        (status = 502, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn department_equipment(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let view = InventoryService::department_equipment(&state.repos, &department_id).await?;
    Ok((StatusCode::OK, Json(view)))
}

/// GET /api/departments/:department_id/requests
#[utoipa::path(
    get,
    path = "/api/departments/{departmentId}/requests",
    tag = "departments",
    params(("departmentId" = String, Path, description = "Department id")),
    responses(
        (status = 200, description = "Requests grouped by room", body = DepartmentRequests),
        (status = 404, description = "Department not found", body = ErrorBody),
        (status = 502, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn department_requests(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let view = InventoryService::department_requests(&state.repos, &department_id).await?;
    Ok((StatusCode::OK, Json(view)))
}
