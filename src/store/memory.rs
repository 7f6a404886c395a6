//! In-process document store. Documents are kept as JSON in insertion order so filters
//! see exactly what a document database would see.

use super::{DocumentStore, Filter};
use crate::error::StoreError;
use crate::model::Document;
use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

pub struct MemoryStore<T> {
    docs: RwLock<Vec<(String, Value)>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Document> MemoryStore<T> {
    pub fn new() -> Self {
        MemoryStore {
            docs: RwLock::new(Vec::new()),
            _marker: PhantomData,
        }
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Insert a raw JSON document, bypassing encoding. Lets tests plant malformed data.
    pub fn insert_raw(&self, id: &str, value: Value) -> Result<(), StoreError> {
        let mut docs = self.write()?;
        if docs.iter().any(|(k, _)| k == id) {
            return Err(StoreError::conflict(T::COLLECTION, id));
        }
        docs.push((id.to_string(), value));
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<(String, Value)>>, StoreError> {
        self.docs
            .read()
            .map_err(|_| StoreError::StoreFailure(format!("{} lock poisoned", T::COLLECTION)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<(String, Value)>>, StoreError> {
        self.docs
            .write()
            .map_err(|_| StoreError::StoreFailure(format!("{} lock poisoned", T::COLLECTION)))
    }
}

impl<T: Document> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> DocumentStore<T> for MemoryStore<T> {
    async fn insert(&self, id: &str, document: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(document)?;
        tracing::debug!(collection = T::COLLECTION, id, "insert");
        self.insert_raw(id, value)
    }

    async fn replace(&self, id: &str, document: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(document)?;
        tracing::debug!(collection = T::COLLECTION, id, "replace");
        let mut docs = self.write()?;
        let slot = docs
            .iter_mut()
            .find(|(k, _)| k == id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))?;
        slot.1 = value;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        tracing::debug!(collection = T::COLLECTION, id, "delete");
        let mut docs = self.write()?;
        let pos = docs
            .iter()
            .position(|(k, _)| k == id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))?;
        docs.remove(pos);
        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<T, StoreError> {
        tracing::debug!(collection = T::COLLECTION, id, "find one");
        let value = self
            .read()?
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))?;
        Ok(serde_json::from_value(value)?)
    }

    async fn find_many(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        tracing::debug!(collection = T::COLLECTION, filter = ?filter, "find many");
        let matched: Vec<Value> = self
            .read()?
            .iter()
            .filter(|(_, v)| filter.matches(v))
            .map(|(_, v)| v.clone())
            .collect();
        matched
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(StoreError::from))
            .collect()
    }

    async fn close(&self) {}
}
