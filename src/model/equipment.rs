use super::{Document, RoomScoped};
use crate::error::AppError;
use crate::service::validation::{require_non_empty, require_positive, Validate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A counted piece of equipment located in a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    /// Generated on create when empty.
    #[serde(default)]
    pub id: String,
    /// Id of the room the equipment belongs to.
    pub room: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// Number of items available.
    pub count: i32,
}

impl Validate for Equipment {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("room", &self.room)?;
        require_non_empty("type", &self.kind)?;
        require_non_empty("name", &self.name)?;
        require_positive("count", self.count)
    }
}

impl Document for Equipment {
    const COLLECTION: &'static str = "equipment";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl RoomScoped for Equipment {
    const ROOM_FIELD: &'static str = "room";

    fn room_id(&self) -> &str {
        &self.room
    }
}
