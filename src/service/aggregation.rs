//! Department views joining rooms with their equipment or requests.
//!
//! Three round trips per view: the department, its rooms, then one set-membership
//! query for every child of those rooms. Children are grouped per room without
//! re-sorting, so store order survives. Any failure aborts the whole view.

use crate::error::AppError;
use crate::model::{Department, Equipment, Request, Room, RoomScoped};
use crate::repository::Repositories;
use crate::store::{DocumentStore, Filter};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentEquipment {
    pub id: String,
    pub name: String,
    pub rooms: Vec<RoomEquipment>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoomEquipment {
    pub id: String,
    pub name: String,
    pub equipment: Vec<Equipment>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct DepartmentRequests {
    pub id: String,
    pub name: String,
    pub rooms: Vec<RoomRequests>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoomRequests {
    pub id: String,
    pub name: String,
    pub requests: Vec<Request>,
}

/// A room and the children that reference it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomGroup<C> {
    pub room: Room,
    pub children: Vec<C>,
}

pub async fn department_equipment(
    repos: &Repositories,
    department_id: &str,
) -> Result<DepartmentEquipment, AppError> {
    let (department, groups) = collect_department(repos, repos.equipment.as_ref(), department_id).await?;
    Ok(DepartmentEquipment {
        id: department.id,
        name: department.name,
        rooms: groups
            .into_iter()
            .map(|g| RoomEquipment {
                id: g.room.id,
                name: g.room.name,
                equipment: g.children,
            })
            .collect(),
    })
}

pub async fn department_requests(
    repos: &Repositories,
    department_id: &str,
) -> Result<DepartmentRequests, AppError> {
    let (department, groups) = collect_department(repos, repos.requests.as_ref(), department_id).await?;
    Ok(DepartmentRequests {
        id: department.id,
        name: department.name,
        rooms: groups
            .into_iter()
            .map(|g| RoomRequests {
                id: g.room.id,
                name: g.room.name,
                requests: g.children,
            })
            .collect(),
    })
}

/// Rooms of an existing department, in store order.
pub async fn department_rooms(repos: &Repositories, department_id: &str) -> Result<Vec<Room>, AppError> {
    require_department_id(department_id)?;
    repos.departments.find_one(department_id).await?;
    rooms_of(repos, department_id).await
}

async fn collect_department<C: RoomScoped>(
    repos: &Repositories,
    children: &dyn DocumentStore<C>,
    department_id: &str,
) -> Result<(Department, Vec<RoomGroup<C>>), AppError> {
    require_department_id(department_id)?;
    let department = repos.departments.find_one(department_id).await?;
    let rooms = rooms_of(repos, department_id).await?;
    let fetched = if rooms.is_empty() {
        Vec::new()
    } else {
        let room_ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        children
            .find_many(&Filter::all().is_in(C::ROOM_FIELD, room_ids))
            .await?
    };
    tracing::debug!(
        department_id,
        collection = C::COLLECTION,
        rooms = rooms.len(),
        children = fetched.len(),
        "assembled department view"
    );
    Ok((department, partition_by_room(rooms, fetched)))
}

async fn rooms_of(repos: &Repositories, department_id: &str) -> Result<Vec<Room>, AppError> {
    let rooms = repos
        .rooms
        .find_many(&Filter::all().eq(Room::DEPARTMENT_FIELD, department_id))
        .await?;
    Ok(rooms)
}

fn require_department_id(department_id: &str) -> Result<(), AppError> {
    if department_id.is_empty() {
        return Err(AppError::InvalidArgument("department id is required".into()));
    }
    Ok(())
}

/// Group `children` under their room, keeping the relative order of `children`.
/// Rooms with no children get an empty list; children of unlisted rooms are dropped.
pub fn partition_by_room<C: RoomScoped>(rooms: Vec<Room>, children: Vec<C>) -> Vec<RoomGroup<C>> {
    let mut by_room: HashMap<String, Vec<C>> = HashMap::new();
    for child in children {
        by_room.entry(child.room_id().to_string()).or_default().push(child);
    }
    rooms
        .into_iter()
        .map(|room| {
            let children = by_room.remove(&room.id).unwrap_or_default();
            RoomGroup { room, children }
        })
        .collect()
}
