use super::{Document, RoomScoped};
use crate::error::AppError;
use crate::service::validation::{require_non_empty, require_positive, Validate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A repair or supply request raised for a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Request {
    #[serde(default)]
    pub id: String,
    pub room_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the equipment requested or to be repaired.
    pub name: String,
    /// Only meaningful for missing-equipment requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(default)]
    pub description: String,
}

impl Validate for Request {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty("room_id", &self.room_id)?;
        require_non_empty("type", &self.kind)?;
        require_non_empty("name", &self.name)?;
        match self.count {
            Some(count) => require_positive("count", count),
            None => Ok(()),
        }
    }
}

impl Document for Request {
    const COLLECTION: &'static str = "requests";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl RoomScoped for Request {
    const ROOM_FIELD: &'static str = "room_id";

    fn room_id(&self) -> &str {
        &self.room_id
    }
}
