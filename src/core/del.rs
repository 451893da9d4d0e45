use crate::core::repository::EntryRepository;
use crate::core::table::EntryTable;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryRecord;
use crate::storage::Storage;

/// High-level business logic for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove exactly one entry by its 1-based table index and re-persist
    /// the whole snapshot. All other entries keep their values and order.
    pub fn apply(storage: &mut dyn Storage, index: usize) -> AppResult<EntryRecord> {
        let mut table = EntryRepository::load_all(storage)?;

        let idx = index
            .checked_sub(1)
            .ok_or(AppError::InvalidEntryIndex(index))?;
        let handle = table
            .handle_at(idx)
            .ok_or(AppError::InvalidEntryIndex(index))?;
        let removed = table
            .record_at(idx)
            .cloned()
            .ok_or(AppError::InvalidEntryIndex(index))?;

        table.remove(handle);
        EntryRepository::save_all(storage, &table)?;

        Ok(removed)
    }

    /// Current table, for the pre-deletion prompt.
    pub fn load(storage: &dyn Storage) -> AppResult<EntryTable> {
        EntryRepository::load_all(storage)
    }
}
