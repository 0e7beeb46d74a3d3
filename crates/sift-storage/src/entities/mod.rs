//! SQLite canonical entity store.
//!
//! One row per `(entity_type, name)`. Names come back in rowid order, which
//! is the iteration order the entity matcher breaks distance ties with.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};
use tracing::debug;

use sift_core::errors::SiftResult;
use sift_core::traits::IEntityStore;

use crate::to_store_err;

const STORE: &str = "entity store";

pub struct SqliteEntityStore {
    conn: Mutex<Connection>,
}

impl SqliteEntityStore {
    /// Open (and migrate) a store backed by a file on disk.
    pub fn open(path: &Path) -> SiftResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_store_err(STORE, "open", e))?;
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> SiftResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(STORE, "open", e))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> SiftResult<Self> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS entities (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                entity_type TEXT NOT NULL,
                name        TEXT NOT NULL,
                UNIQUE (entity_type, name)
            );

            CREATE INDEX IF NOT EXISTS idx_entities_type ON entities(entity_type);
            ",
        )
        .map_err(|e| to_store_err(STORE, "migrate", e))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, operation: &str, f: F) -> SiftResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_store_err(STORE, operation, format!("connection lock poisoned: {e}")))?;
        f(&guard).map_err(|e| to_store_err(STORE, operation, e))
    }

    /// Register a canonical name. Repeats are ignored.
    pub fn insert(&self, entity_type: &str, name: &str) -> SiftResult<()> {
        self.with_conn("insert", |conn| {
            conn.execute(
                "INSERT OR IGNORE INTO entities (entity_type, name) VALUES (?1, ?2)",
                params![entity_type, name],
            )
            .map(|_| ())
        })
    }

    /// Register many names under one type in a single transaction.
    pub fn insert_many<S: AsRef<str>>(&self, entity_type: &str, names: &[S]) -> SiftResult<usize> {
        let inserted = self.with_conn("insert_many", |conn| {
            let tx = conn.unchecked_transaction()?;
            let mut count = 0;
            {
                let mut stmt = tx.prepare(
                    "INSERT OR IGNORE INTO entities (entity_type, name) VALUES (?1, ?2)",
                )?;
                for name in names {
                    count += stmt.execute(params![entity_type, name.as_ref()])?;
                }
            }
            tx.commit()?;
            Ok(count)
        })?;
        debug!(entity_type, inserted, "registered canonical entities");
        Ok(inserted)
    }

    /// Number of names under `entity_type`.
    pub fn count(&self, entity_type: &str) -> SiftResult<usize> {
        self.with_conn("count", |conn| {
            conn.query_row(
                "SELECT COUNT(*) FROM entities WHERE entity_type = ?1",
                params![entity_type],
                |row| row.get::<_, i64>(0),
            )
            .map(|n| n as usize)
        })
    }
}

impl IEntityStore for SqliteEntityStore {
    fn canonical_names(&self, entity_type: &str) -> SiftResult<Vec<String>> {
        self.with_conn("canonical_names", |conn| {
            let mut stmt =
                conn.prepare("SELECT name FROM entities WHERE entity_type = ?1 ORDER BY id")?;
            let rows = stmt.query_map(params![entity_type], |row| row.get::<_, String>(0))?;
            let names = rows.collect::<rusqlite::Result<Vec<String>>>();
            names
        })
    }
}
