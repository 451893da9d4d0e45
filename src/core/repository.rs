use crate::core::extract;
use crate::core::table::EntryTable;
use crate::errors::AppResult;
use crate::models::entry::EntryRecord;
use crate::models::incident_type::IncidentType;
use crate::models::photo::PhotoRef;
use crate::storage::{ENTRIES_KEY, Storage};
use serde::{Deserialize, Serialize};

/// One entry as written to storage. This struct and [`EntryRepository`] are
/// the only two places the serialization format is decided.
///
/// Field names are fixed; data written by earlier releases must stay
/// loadable. `latLon` is the rendered coordinate text (or the `unknown`
/// sentinel); on load it is informative only, since coordinates are
/// re-derived from `mapLink`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedEntry {
    datetime: String,
    katakana_name: String,
    kanji_name: String,
    organization: String,
    incident_type: String,
    area: String,
    address: String,
    map_link: String,
    lat_lon: String,
    photo: String,
    memo: String,
}

impl PersistedEntry {
    fn from_record(rec: &EntryRecord) -> Self {
        Self {
            datetime: rec.submitted_at.clone(),
            katakana_name: rec.katakana_name.clone(),
            kanji_name: rec.kanji_name.clone(),
            organization: rec.organization.clone(),
            incident_type: rec.incident_type.to_store_str().to_string(),
            area: rec.area.clone(),
            address: rec.address.clone(),
            map_link: rec.map_link.clone(),
            lat_lon: rec.coordinates.render(),
            photo: rec.photo.locator().to_string(),
            memo: rec.memo.clone(),
        }
    }

    /// Rebuild the in-memory record. Coordinates come from `mapLink`
    /// through the extractor, so the derivation invariant holds on every
    /// load instead of by convention; the photo locator is re-probed and a
    /// dangling one degrades to the missing state instead of failing.
    fn into_record(self) -> Option<EntryRecord> {
        let incident_type = IncidentType::from_store_str(&self.incident_type)?;
        let coordinates = extract::extract(&self.map_link);
        let photo = PhotoRef::from_locator(&self.photo);

        Some(EntryRecord {
            submitted_at: self.datetime,
            katakana_name: self.katakana_name,
            kanji_name: self.kanji_name,
            organization: self.organization,
            incident_type,
            area: self.area,
            address: self.address,
            map_link: self.map_link,
            coordinates,
            photo,
            memo: self.memo,
        })
    }
}

/// Bridges [`EntryTable`] and the persistence service.
pub struct EntryRepository;

impl EntryRepository {
    /// Serialize the whole current table and replace the stored snapshot.
    /// Never partial: an empty table writes an empty sequence, not a
    /// removal.
    pub fn save_all(storage: &mut dyn Storage, table: &EntryTable) -> AppResult<()> {
        let persisted: Vec<PersistedEntry> = table
            .snapshot()
            .iter()
            .map(PersistedEntry::from_record)
            .collect();
        let json = serde_json::to_string(&persisted)?;
        storage.set(ENTRIES_KEY, &json)
    }

    /// Rebuild the table from storage, preserving order.
    /// An absent key or malformed content yields an empty table; corrupt
    /// persisted data is treated as absence, never as a caller-visible
    /// failure.
    pub fn load_all(storage: &dyn Storage) -> AppResult<EntryTable> {
        let mut table = EntryTable::new();

        let Some(raw) = storage.get(ENTRIES_KEY)? else {
            return Ok(table);
        };

        let persisted: Vec<PersistedEntry> = match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(_) => return Ok(table),
        };

        let mut records = Vec::with_capacity(persisted.len());
        for entry in persisted {
            match entry.into_record() {
                Some(rec) => records.push(rec),
                // One undecodable record poisons the snapshot; degrade to
                // empty rather than silently dropping a single row.
                None => return Ok(EntryTable::new()),
            }
        }

        for rec in records {
            table.append(rec);
        }
        Ok(table)
    }
}
