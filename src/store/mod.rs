//! Generic document store: one collection, one entity type, keyed CRUD plus filtered lookup.
//!
//! Backends only need keyed insert-if-absent, keyed replace-if-present, keyed delete,
//! point lookup and filtered bulk lookup. Each write is a single atomic call.

mod filter;
mod memory;
mod postgres;
mod sql;

pub use filter::{Filter, Predicate};
pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, ensure_schema, PgDocumentStore};

use crate::error::StoreError;
use crate::model::Document;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Insert under `id`. Fails with `Conflict` if the id is taken; the existing document is untouched.
    async fn insert(&self, id: &str, document: &T) -> Result<(), StoreError>;

    /// Replace the whole document under `id`. Fails with `NotFound` if absent; never creates.
    async fn replace(&self, id: &str, document: &T) -> Result<(), StoreError>;

    /// Fails with `NotFound` if absent.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    async fn find_one(&self, id: &str) -> Result<T, StoreError>;

    /// All documents matching `filter`, in store order (insertion order). Empty is not an error.
    async fn find_many(&self, filter: &Filter) -> Result<Vec<T>, StoreError>;

    /// Release the underlying connection. Idempotent.
    async fn close(&self);
}
