//! In-memory storage backend.
//!
//! Ephemeral, insertion-ordered storage for any entity. Used for tests and
//! for running the server without a database file.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Entity};
use super::traits::Repository;

/// Insertion-ordered map behind an async mutex
pub struct InMemoryRepository<T: Entity> {
    entries: Mutex<IndexMap<T::Id, T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<I: std::fmt::Display>(id: &I) -> DomainError {
    DomainError::NotFound(format!("item {}", id))
}

#[async_trait]
impl<T: Entity + 'static> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(entity.id()) {
            return Err(DomainError::Conflict(format!("item {} already exists", entity.id())));
        }
        entries.insert(entity.id().clone(), entity.clone());
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &T::Id) -> DomainResult<T> {
        let entries = self.entries.lock().await;
        entries.get(id).cloned().ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        let entries = self.entries.lock().await;
        Ok(entries.values().cloned().collect())
    }

    async fn update(&self, id: &T::Id, patch: &T::Patch) -> DomainResult<T> {
        let mut entries = self.entries.lock().await;
        let entity = entries.get_mut(id).ok_or_else(|| not_found(id))?;
        entity.apply(patch);
        Ok(entity.clone())
    }

    async fn delete(&self, id: &T::Id) -> DomainResult<()> {
        let mut entries = self.entries.lock().await;
        entries.shift_remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}
