//! The four collection stores, built once at startup and passed explicitly to handlers.

use crate::error::StoreError;
use crate::model::{Department, Equipment, Request, Room};
use crate::store::{ensure_schema, DocumentStore, MemoryStore, PgDocumentStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repositories {
    pub departments: Arc<dyn DocumentStore<Department>>,
    pub rooms: Arc<dyn DocumentStore<Room>>,
    pub equipment: Arc<dyn DocumentStore<Equipment>>,
    pub requests: Arc<dyn DocumentStore<Request>>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Repositories {
            departments: Arc::new(MemoryStore::<Department>::new()),
            rooms: Arc::new(MemoryStore::<Room>::new()),
            equipment: Arc::new(MemoryStore::<Equipment>::new()),
            requests: Arc::new(MemoryStore::<Request>::new()),
        }
    }

    /// PostgreSQL-backed stores sharing one pool. Creates the schema and tables if missing.
    pub async fn postgres(pool: PgPool, schema: &str) -> Result<Self, StoreError> {
        ensure_schema(&pool, schema).await?;
        let departments = PgDocumentStore::<Department>::new(pool.clone(), schema);
        let rooms = PgDocumentStore::<Room>::new(pool.clone(), schema);
        let equipment = PgDocumentStore::<Equipment>::new(pool.clone(), schema);
        let requests = PgDocumentStore::<Request>::new(pool, schema);
        departments.ensure_collection().await?;
        rooms.ensure_collection().await?;
        equipment.ensure_collection().await?;
        requests.ensure_collection().await?;
        Ok(Repositories {
            departments: Arc::new(departments),
            rooms: Arc::new(rooms),
            equipment: Arc::new(equipment),
            requests: Arc::new(requests),
        })
    }

    /// Tear down every store. Safe to call more than once.
    pub async fn close(&self) {
        self.departments.close().await;
        self.rooms.close().await;
        self.equipment.close().await;
        self.requests.close().await;
    }
}
