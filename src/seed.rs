//! Development seed data: departments and rooms of the initial deployment.

use crate::error::AppError;
use crate::model::{Department, Room};
use crate::repository::Repositories;
use crate::store::Filter;

const DEPARTMENTS: &[(&str, &str)] = &[
    ("1", "Pediatrické oddelenie"),
    ("2", "Chirurgia"),
    ("3", "Alergológia"),
    ("4", "Ortopédia"),
    ("5", "Neurológia"),
];

/// (id, department_id, name)
const ROOMS: &[(&str, &str, &str)] = &[
    ("1", "1", "Miestnosť 1.1"),
    ("2", "1", "Miestnosť 1.2"),
    ("3", "2", "Miestnosť 2.1"),
    ("4", "2", "Miestnosť 2.2"),
    ("5", "2", "Miestnosť 2.3"),
    ("6", "3", "Miestnosť 3.1"),
    ("7", "4", "Miestnosť 4.1"),
    ("8", "5", "Miestnosť 5.1"),
    ("9", "5", "Miestnosť 5.2"),
];

/// Insert seed departments and rooms when both collections are empty.
/// Returns whether anything was inserted.
pub async fn insert_initial_data(repos: &Repositories) -> Result<bool, AppError> {
    if !repos.departments.find_many(&Filter::all()).await?.is_empty() {
        return Ok(false);
    }
    if !repos.rooms.find_many(&Filter::all()).await?.is_empty() {
        return Ok(false);
    }
    for (id, name) in DEPARTMENTS {
        let department = Department {
            id: id.to_string(),
            name: name.to_string(),
        };
        repos.departments.insert(id, &department).await?;
    }
    for (id, department_id, name) in ROOMS {
        let room = Room {
            id: id.to_string(),
            department_id: department_id.to_string(),
            name: name.to_string(),
        };
        repos.rooms.insert(id, &room).await?;
    }
    tracing::info!(departments = DEPARTMENTS.len(), rooms = ROOMS.len(), "inserted seed data");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::InventoryService;

    #[tokio::test]
    async fn test_seeds_empty_store_once() {
        let repos = Repositories::in_memory();
        assert!(insert_initial_data(&repos).await.unwrap());
        assert!(!insert_initial_data(&repos).await.unwrap());

        let departments = InventoryService::list_departments(&repos).await.unwrap();
        assert_eq!(departments.len(), 5);
        assert_eq!(departments[1].name, "Chirurgia");

        let view = InventoryService::department_equipment(&repos, "2").await.unwrap();
        let room_ids: Vec<&str> = view.rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(room_ids, vec!["3", "4", "5"]);
    }

    #[tokio::test]
    async fn test_skips_when_rooms_exist() {
        let repos = Repositories::in_memory();
        let room = Room {
            id: "x".into(),
            department_id: "1".into(),
            name: "Existing".into(),
        };
        repos.rooms.insert("x", &room).await.unwrap();

        assert!(!insert_initial_data(&repos).await.unwrap());
        assert!(InventoryService::list_departments(&repos).await.unwrap().is_empty());
    }
}
