//! Item Repository
//!
//! SQLite-backed implementation for Item CRUD operations.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Entity, Item, ItemId, ItemPatch};
use super::db::internal;
use super::traits::Repository;

const SELECT_ITEM: &str = "SELECT id, name, completed, due_date FROM items";

/// SQLite implementation of Item repository
pub struct ItemRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ItemRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

fn find(conn: &Connection, id: &ItemId) -> DomainResult<Option<Item>> {
    conn.query_row(
        &format!("{} WHERE id = ?1", SELECT_ITEM),
        rusqlite::params![id.as_str()],
        row_to_item,
    )
    .optional()
    .map_err(internal)
}

fn not_found(id: &ItemId) -> DomainError {
    DomainError::NotFound(format!("item {}", id))
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    async fn create(&self, entity: &Item) -> DomainResult<Item> {
        let conn = self.conn.lock().await;

        let result = conn.execute(
            "INSERT INTO items (id, name, completed, due_date) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                entity.id.as_str(),
                entity.name,
                entity.completed,
                entity.due_date,
            ],
        );

        match result {
            Ok(_) => Ok(entity.clone()),
            Err(e) if e.sqlite_error_code() == Some(rusqlite::ErrorCode::ConstraintViolation) => {
                Err(DomainError::Conflict(format!("item {} already exists", entity.id)))
            }
            Err(e) => Err(internal(e)),
        }
    }

    async fn find_by_id(&self, id: &ItemId) -> DomainResult<Item> {
        let conn = self.conn.lock().await;
        find(&conn, id)?.ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn
            .prepare(&format!("{} ORDER BY rowid ASC", SELECT_ITEM))
            .map_err(internal)?;
        let rows = stmt.query_map([], row_to_item).map_err(internal)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row.map_err(internal)?);
        }
        Ok(items)
    }

    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> DomainResult<Item> {
        let conn = self.conn.lock().await;

        let mut item = find(&conn, id)?.ok_or_else(|| not_found(id))?;
        item.apply(patch);

        conn.execute(
            "UPDATE items SET name = ?1, completed = ?2, due_date = ?3 WHERE id = ?4",
            rusqlite::params![item.name, item.completed, item.due_date, id.as_str()],
        )
        .map_err(internal)?;

        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let removed = conn
            .execute("DELETE FROM items WHERE id = ?1", rusqlite::params![id.as_str()])
            .map_err(internal)?;

        if removed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

/// Convert a database row to Item
fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: ItemId::from(row.get::<_, String>(0)?),
        name: row.get(1)?,
        completed: row.get::<_, i64>(2)? != 0,
        due_date: row.get(3)?,
    })
}
