use crate::config::Config;
use crate::core::draft_store::FormDraftStore;
use crate::core::extract;
use crate::core::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryRecord;
use crate::models::photo::PhotoRef;
use crate::storage::Storage;
use crate::utils::date::now_formatted;
use std::path::Path;

/// High-level business logic for the `submit` command.
pub struct SubmitLogic;

impl SubmitLogic {
    /// Turn the current draft into a submitted entry.
    ///
    /// Validation happens up front and rejects the submission with the full
    /// list of unmet requirements; nothing is persisted on rejection. On
    /// success the entry is appended to the loaded table, the whole table
    /// snapshot is re-persisted, and the draft is cleared.
    pub fn apply(
        storage: &mut dyn Storage,
        cfg: &Config,
        photo: Option<&str>,
    ) -> AppResult<EntryRecord> {
        let draft = FormDraftStore::load(storage)?;

        let unmet = draft.unmet_requirements();
        if !unmet.is_empty() {
            return Err(AppError::DraftNotReady(unmet.join("; ")));
        }

        // The photo is attached at submit time; it is session state, never
        // part of the persisted draft.
        let photo = match photo {
            Some(path) if !Path::new(path).exists() => {
                return Err(AppError::PhotoNotFound(path.to_string()));
            }
            Some(path) => PhotoRef::Attached(path.to_string()),
            None => PhotoRef::None,
        };

        let coordinates = extract::extract(&draft.map_link);
        let submitted_at = now_formatted(&cfg.datetime_format);

        let record = EntryRecord::from_draft(&draft, coordinates, photo, submitted_at)?;

        let mut table = EntryRepository::load_all(storage)?;
        table.append(record.clone());
        EntryRepository::save_all(storage, &table)?;

        FormDraftStore::clear(storage)?;

        Ok(record)
    }
}
