//! Domain Layer
//!
//! Contains the to-do entity and core abstractions.
//! This layer has NO external dependencies (except serde and uuid).

mod entity;
mod item;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Item, ItemId, ItemPatch, NewItem};
