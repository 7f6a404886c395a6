//! Stored entity shapes and the traits the generic store and aggregations rely on.

mod department;
mod equipment;
mod request;
mod room;

pub use department::Department;
pub use equipment::Equipment;
pub use request::Request;
pub use room::Room;

use serde::{de::DeserializeOwned, Serialize};

/// A value persisted as one document in a named collection, keyed by its own id field.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection (and PostgreSQL table) name.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// A document owned by a room. `ROOM_FIELD` is the stored field holding the room id,
/// used to build the bulk set-membership query.
pub trait RoomScoped: Document {
    const ROOM_FIELD: &'static str;

    fn room_id(&self) -> &str;
}
