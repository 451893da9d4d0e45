//! SQLite-backed key-value store (lightweight for CLI usage).

use super::{DRAFT_KEY, ENTRIES_KEY, Storage, initialize};
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

/// Diagnostics for `db --info`.
pub struct StoreInfo {
    pub keys: usize,
    pub has_draft: bool,
    pub entries_bytes: usize,
}

impl SqliteStore {
    /// Open (creating if needed) the store at `path`.
    /// The schema is ensured on every open; a fresh file is immediately
    /// usable without a separate setup step.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        initialize::init_store(&conn)?;
        Ok(Self { conn })
    }

    /// Run SQLite's integrity check; returns the verdict string.
    pub fn integrity_check(&self) -> AppResult<String> {
        let verdict: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        Ok(verdict)
    }

    pub fn info(&self) -> AppResult<StoreInfo> {
        let keys: usize = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))?;
        let has_draft = self.get(DRAFT_KEY)?.is_some();
        let entries_bytes = self.get(ENTRIES_KEY)?.map(|v| v.len()).unwrap_or(0);

        Ok(StoreInfo {
            keys,
            has_draft,
            entries_bytes,
        })
    }
}

impl Storage for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}
