use super::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Room {
    pub id: String,
    /// Owning department. Not checked against the departments collection.
    pub department_id: String,
    pub name: String,
}

impl Room {
    /// Stored field name used when filtering rooms by department.
    pub const DEPARTMENT_FIELD: &'static str = "department_id";
}

impl Document for Room {
    const COLLECTION: &'static str = "rooms";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
