//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use rusqlite::Connection;
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

/// Path that selects a private in-memory database
pub const MEMORY_PATH: &str = ":memory:";

/// Open the database at `db_path` and bring the schema up to date
pub fn init_db(db_path: &Path) -> DomainResult<Connection> {
    let conn = if db_path == Path::new(MEMORY_PATH) {
        Connection::open_in_memory().map_err(internal)?
    } else {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::Internal(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
        Connection::open(db_path).map_err(internal)?
    };

    run_migrations(&conn)?;
    tracing::debug!(path = %db_path.display(), "database ready");

    Ok(conn)
}

pub(super) fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .map_err(internal)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(internal)?;

    for name in names {
        if name.map_err(internal)? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS items (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )
    .map_err(internal)?;

    // Due dates arrived after the first schema
    if !column_exists(conn, "items", "due_date")? {
        conn.execute("ALTER TABLE items ADD COLUMN due_date TEXT", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add due_date: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_repeatable() {
        let conn = init_db(Path::new(MEMORY_PATH)).unwrap();
        run_migrations(&conn).unwrap();
        assert!(column_exists(&conn, "items", "due_date").unwrap());
        assert!(!column_exists(&conn, "items", "missing").unwrap());
    }

    #[test]
    fn test_upgrades_legacy_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE items (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL, completed INTEGER NOT NULL DEFAULT 0)",
            [],
        )
        .unwrap();
        assert!(!column_exists(&conn, "items", "due_date").unwrap());

        run_migrations(&conn).unwrap();
        assert!(column_exists(&conn, "items", "due_date").unwrap());
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("todo.db");
        init_db(&path).unwrap();
        assert!(path.exists());
    }
}
