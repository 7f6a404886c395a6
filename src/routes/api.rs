//! Inventory routes.

use crate::handlers::departments::{department_equipment, department_requests, department_rooms, list_departments};
use crate::handlers::equipment::{add_room_equipment, delete_equipment, get_equipment, update_equipment};
use crate::handlers::requests::{add_room_request, delete_request, get_request, update_request};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/departments", get(list_departments))
        .route("/departments/", get(list_departments))
        .route("/departments/:department_id/rooms", get(department_rooms))
        .route("/departments/:department_id/equipment", get(department_equipment))
        .route("/departments/:department_id/requests", get(department_requests))
        .route("/rooms/:room_id/equipment", post(add_room_equipment))
        .route("/rooms/:room_id/requests", post(add_room_request))
        .route(
            "/equipment/:equipment_id",
            get(get_equipment).put(update_equipment).delete(delete_equipment),
        )
        .route(
            "/requests/:request_id",
            get(get_request).put(update_request).delete(delete_request),
        )
        .with_state(state)
}
