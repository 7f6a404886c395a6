//! OpenAPI document for the inventory API.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{departments, equipment, requests};
use crate::model::{Department, Equipment, Request, Room};
use crate::service::{DepartmentEquipment, DepartmentRequests, RoomEquipment, RoomRequests};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Equipment Management API",
        version = "1.0.0",
        description = "Equipment and requests management for hospital departments"
    ),
    paths(
        departments::list_departments,
        departments::department_rooms,
        departments::department_equipment,
        departments::department_requests,
        equipment::add_room_equipment,
        equipment::get_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        requests::add_room_request,
        requests::get_request,
        requests::update_request,
        requests::delete_request,
    ),
    components(schemas(
        Department,
        Room,
        Equipment,
        Request,
        DepartmentEquipment,
        RoomEquipment,
        DepartmentRequests,
        RoomRequests,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "departments", description = "Departments and their nested views"),
        (name = "equipment", description = "Room equipment"),
        (name = "requests", description = "Repair and supply requests")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_inventory_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/departments",
            "/api/departments/{departmentId}/equipment",
            "/api/departments/{departmentId}/requests",
            "/api/rooms/{roomId}/equipment",
            "/api/rooms/{roomId}/requests",
            "/api/equipment/{equipmentId}",
            "/api/requests/{requestId}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {}", expected);
        }
    }
}
