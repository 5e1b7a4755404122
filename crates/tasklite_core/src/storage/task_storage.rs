//! Storage adapter contract and built-in adapters.
//!
//! # Responsibility
//! - Carry the serialized task list across a key-value durability boundary.
//! - Keep SQLite and filesystem details out of store logic.
//!
//! # Invariants
//! - `save_raw` replaces the previous payload wholesale.
//! - Adapters are best-effort; the store decides what a failed save means.

use crate::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

/// Slot key under which the serialized task list lives in `kv_slots`.
const TASKS_SLOT_KEY: &str = "tasks.v1";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for load/save operations across the durability boundary.
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage io failure: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Key-value durability boundary used by the task list store.
pub trait StorageAdapter {
    /// Returns the previously saved payload, or `None` on first run.
    fn load_raw(&mut self) -> StorageResult<Option<String>>;

    /// Replaces the saved payload. Best-effort; the core never retries.
    fn save_raw(&mut self, raw: &str) -> StorageResult<()>;
}

/// In-process adapter for tests and embedding without durability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing payload, as if a prior run had saved it.
    pub fn with_payload(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }

    /// Read-only peek at the stored payload, for assertions.
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load_raw(&mut self) -> StorageResult<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save_raw(&mut self, raw: &str) -> StorageResult<()> {
        self.slot = Some(raw.to_string());
        Ok(())
    }
}

/// One document on disk, rewritten in full on every save.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageAdapter for FileStorage {
    fn load_raw(&mut self) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save_raw(&mut self, raw: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// SQLite-backed adapter storing the payload in one `kv_slots` row.
pub struct SqliteStorage {
    conn: Connection,
    key: &'static str,
}

impl SqliteStorage {
    /// Wraps an already-bootstrapped connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn,
            key: TASKS_SLOT_KEY,
        }
    }

    /// Opens a database file, applies migrations, and wraps it.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// In-memory variant, used by tests.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl StorageAdapter for SqliteStorage {
    fn load_raw(&mut self) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_slots WHERE key = ?1;")?;
        let mut rows = stmt.query([self.key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("value")?));
        }
        Ok(None)
    }

    fn save_raw(&mut self, raw: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key, raw],
        )?;
        Ok(())
    }
}
