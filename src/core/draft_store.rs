use crate::errors::AppResult;
use crate::models::draft::Draft;
use crate::storage::{DRAFT_KEY, Storage};

/// Persists and restores the in-progress draft.
///
/// One fixed key, whole-record overwrite on every save. Cheap enough to run
/// once per mutating command.
pub struct FormDraftStore;

impl FormDraftStore {
    /// Unconditionally overwrite the stored draft.
    pub fn save(storage: &mut dyn Storage, draft: &Draft) -> AppResult<()> {
        let json = serde_json::to_string(draft)?;
        storage.set(DRAFT_KEY, &json)
    }

    /// Load the stored draft. A missing key or a value that no longer
    /// parses both come back as the all-empty draft; corruption is treated
    /// as absence, never surfaced.
    pub fn load(storage: &dyn Storage) -> AppResult<Draft> {
        let draft = match storage.get(DRAFT_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Draft::default(),
        };
        Ok(draft)
    }

    /// Remove the stored draft entirely.
    pub fn clear(storage: &mut dyn Storage) -> AppResult<()> {
        storage.remove(DRAFT_KEY)
    }
}
