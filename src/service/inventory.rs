//! Inventory operations behind the HTTP shim: department listing, room-scoped creates,
//! id-checked replaces, deletes and point reads for equipment and requests.

use super::aggregation::{self, DepartmentEquipment, DepartmentRequests};
use super::identity::{assign_id, ensure_matching};
use super::validation::Validate;
use crate::error::AppError;
use crate::model::{Department, Document, Equipment, Request, Room, RoomScoped};
use crate::repository::Repositories;
use crate::store::{DocumentStore, Filter};

pub struct InventoryService;

impl InventoryService {
    /// Every department, in store order.
    pub async fn list_departments(repos: &Repositories) -> Result<Vec<Department>, AppError> {
        Ok(repos.departments.find_many(&Filter::all()).await?)
    }

    pub async fn department_rooms(repos: &Repositories, department_id: &str) -> Result<Vec<Room>, AppError> {
        aggregation::department_rooms(repos, department_id).await
    }

    pub async fn department_equipment(
        repos: &Repositories,
        department_id: &str,
    ) -> Result<DepartmentEquipment, AppError> {
        aggregation::department_equipment(repos, department_id).await
    }

    pub async fn department_requests(
        repos: &Repositories,
        department_id: &str,
    ) -> Result<DepartmentRequests, AppError> {
        aggregation::department_requests(repos, department_id).await
    }

    pub async fn add_room_equipment(
        repos: &Repositories,
        room_id: &str,
        equipment: Equipment,
    ) -> Result<Equipment, AppError> {
        create_in_room(repos.equipment.as_ref(), room_id, equipment).await
    }

    pub async fn add_room_request(
        repos: &Repositories,
        room_id: &str,
        request: Request,
    ) -> Result<Request, AppError> {
        create_in_room(repos.requests.as_ref(), room_id, request).await
    }

    pub async fn get_equipment(repos: &Repositories, id: &str) -> Result<Equipment, AppError> {
        Ok(repos.equipment.find_one(id).await?)
    }

    pub async fn get_request(repos: &Repositories, id: &str) -> Result<Request, AppError> {
        Ok(repos.requests.find_one(id).await?)
    }

    pub async fn update_equipment(
        repos: &Repositories,
        id: &str,
        equipment: Equipment,
    ) -> Result<Equipment, AppError> {
        replace_checked(repos.equipment.as_ref(), id, equipment).await
    }

    pub async fn update_request(repos: &Repositories, id: &str, request: Request) -> Result<Request, AppError> {
        replace_checked(repos.requests.as_ref(), id, request).await
    }

    pub async fn delete_equipment(repos: &Repositories, id: &str) -> Result<(), AppError> {
        Ok(repos.equipment.delete(id).await?)
    }

    pub async fn delete_request(repos: &Repositories, id: &str) -> Result<(), AppError> {
        Ok(repos.requests.delete(id).await?)
    }
}

/// Validate, check the body's room against the path, assign an id if missing, insert.
async fn create_in_room<C: RoomScoped + Validate>(
    store: &dyn DocumentStore<C>,
    room_id: &str,
    mut doc: C,
) -> Result<C, AppError> {
    doc.validate()?;
    ensure_matching(C::ROOM_FIELD, room_id, doc.room_id())?;
    assign_id(&mut doc);
    store.insert(doc.id(), &doc).await?;
    tracing::info!(collection = C::COLLECTION, id = doc.id(), room_id, "created");
    Ok(doc)
}

/// Validate, check the body's id against the path, replace wholesale.
async fn replace_checked<C: Document + Validate>(
    store: &dyn DocumentStore<C>,
    id: &str,
    doc: C,
) -> Result<C, AppError> {
    doc.validate()?;
    ensure_matching("id", id, doc.id())?;
    store.replace(id, &doc).await?;
    tracing::info!(collection = C::COLLECTION, id, "replaced");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::collections::HashSet;

    fn equipment(id: &str, room: &str) -> Equipment {
        Equipment {
            id: id.into(),
            room: room.into(),
            kind: "infusion pump".into(),
            name: "Pump".into(),
            count: 3,
        }
    }

    fn request(id: &str, room_id: &str) -> Request {
        Request {
            id: id.into(),
            room_id: room_id.into(),
            kind: "missing".into(),
            name: "Pillow".into(),
            count: Some(4),
            description: "Need more pillows".into(),
        }
    }

    #[tokio::test]
    async fn test_create_without_id_generates_unique_ids() {
        let repos = Repositories::in_memory();
        let mut ids = HashSet::new();
        for _ in 0..10 {
            let created = InventoryService::add_room_equipment(&repos, "1", equipment("", "1"))
                .await
                .unwrap();
            assert!(!created.id.is_empty());
            ids.insert(created.id);
        }
        assert_eq!(ids.len(), 10);
    }

    #[tokio::test]
    async fn test_create_round_trip() {
        let repos = Repositories::in_memory();
        let created = InventoryService::add_room_request(&repos, "5", request("", "5"))
            .await
            .unwrap();

        let fetched = InventoryService::get_request(&repos, &created.id).await.unwrap();
        let mut expected = request("", "5");
        expected.id = created.id.clone();
        assert_eq!(fetched, expected);
    }

    #[tokio::test]
    async fn test_create_with_existing_id_conflicts() {
        let repos = Repositories::in_memory();
        InventoryService::add_room_equipment(&repos, "1", equipment("e1", "1"))
            .await
            .unwrap();

        let mut other = equipment("e1", "1");
        other.count = 99;
        let err = InventoryService::add_room_equipment(&repos, "1", other).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(InventoryService::get_equipment(&repos, "e1").await.unwrap().count, 3);
    }

    #[tokio::test]
    async fn test_create_with_room_mismatch_writes_nothing() {
        let repos = Repositories::in_memory();
        let err = InventoryService::add_room_equipment(&repos, "1", equipment("e1", "2"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(repos.equipment.find_many(&Filter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_matching_id() {
        let repos = Repositories::in_memory();
        InventoryService::add_room_request(&repos, "1", request("q1", "1"))
            .await
            .unwrap();

        let err = InventoryService::update_request(&repos, "q2", request("q1", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));

        let mut changed = request("q1", "1");
        changed.description = "Done".into();
        let updated = InventoryService::update_request(&repos, "q1", changed.clone()).await.unwrap();
        assert_eq!(updated, changed);
        assert_eq!(InventoryService::get_request(&repos, "q1").await.unwrap(), changed);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_creates_nothing() {
        let repos = Repositories::in_memory();
        let err = InventoryService::update_equipment(&repos, "e9", equipment("e9", "1"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            repos.equipment.find_one("e9").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let repos = Repositories::in_memory();
        InventoryService::add_room_equipment(&repos, "1", equipment("e1", "1"))
            .await
            .unwrap();

        InventoryService::delete_equipment(&repos, "e1").await.unwrap();
        assert!(InventoryService::get_equipment(&repos, "e1").await.unwrap_err().is_not_found());
        assert!(InventoryService::delete_equipment(&repos, "e1").await.unwrap_err().is_not_found());
        assert!(InventoryService::delete_request(&repos, "nope").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_departments_empty_is_ok() {
        let repos = Repositories::in_memory();
        assert!(InventoryService::list_departments(&repos).await.unwrap().is_empty());
    }
}
