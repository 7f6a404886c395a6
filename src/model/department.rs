use super::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Root of the department → room → equipment/requests hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub id: String,
    pub name: String,
}

impl Document for Department {
    const COLLECTION: &'static str = "departments";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
