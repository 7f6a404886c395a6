//! Ward inventory: REST backend for hospital departments, rooms, equipment and
//! repair/supply requests on top of a generic document store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreBackend};
pub use error::{AppError, ConfigError, StoreError};
pub use repository::Repositories;
pub use routes::{api_routes, app, common_routes};
pub use seed::insert_initial_data;
pub use service::InventoryService;
pub use state::AppState;
pub use store::{ensure_database_exists, DocumentStore, Filter, MemoryStore, PgDocumentStore};
