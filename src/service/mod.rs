//! Core operations: identity policy, validation, department views and inventory CRUD.

pub mod aggregation;
pub mod identity;
mod inventory;
pub mod validation;

pub use aggregation::{DepartmentEquipment, DepartmentRequests, RoomEquipment, RoomRequests};
pub use inventory::InventoryService;
pub use validation::Validate;
