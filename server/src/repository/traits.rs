//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD-by-id operations
///
/// Generic over any Entity type.
/// Each call is atomic for the single record it touches.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity. `Conflict` if the id is already taken.
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID. `NotFound` if absent.
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<T>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Merge a patch into an existing entity and return the result
    async fn update(&self, id: &T::Id, patch: &T::Patch) -> DomainResult<T>;

    /// Delete entity by ID. `NotFound` if absent.
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
