//! Local key-value persistence.
//!
//! The application state lives under two fixed keys in an origin-scoped,
//! synchronous key-value store: the in-progress draft and the full entries
//! snapshot. Every write is a whole-value overwrite; partial updates do not
//! exist at this layer.

pub mod initialize;
pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;

/// Key holding the single in-progress draft.
pub const DRAFT_KEY: &str = "draft";

/// Key holding the ordered entries snapshot.
pub const ENTRIES_KEY: &str = "entries";

/// Synchronous string key-value store.
///
/// Injected into the draft store and the entry repository so the
/// data-consistency layer is testable against an in-memory implementation.
pub trait Storage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
