//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod item_repo;
mod memory;


pub use traits::Repository;
pub use db::init_db;
pub use item_repo::ItemRepository;
pub use memory::InMemoryRepository;
