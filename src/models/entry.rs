use super::coords::Coordinates;
use super::draft::Draft;
use super::incident_type::IncidentType;
use super::photo::PhotoRef;
use crate::errors::{AppError, AppResult};
use crate::utils::text::or_none;

/// One submitted incident observation.
///
/// Immutable once created; the only mutation the system knows is deletion
/// of the whole record. `submitted_at` is fixed at creation, `coordinates`
/// is always derived from `map_link` and never entered directly.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRecord {
    pub submitted_at: String,
    pub katakana_name: String,
    pub kanji_name: String,
    pub organization: String,
    pub incident_type: IncidentType,
    pub area: String,
    pub address: String,
    pub map_link: String,
    pub coordinates: Coordinates,
    pub photo: PhotoRef,
    pub memo: String,
}

impl EntryRecord {
    /// Build a record out of a validated draft at submit time.
    /// Absent address/memo fall back to the `none` sentinel, matching the
    /// rendered table.
    pub fn from_draft(
        draft: &Draft,
        coordinates: Coordinates,
        photo: PhotoRef,
        submitted_at: String,
    ) -> AppResult<Self> {
        let incident_type = draft
            .incident_type()
            .ok_or_else(|| AppError::InvalidIncidentType(draft.incident_type.clone()))?;

        Ok(Self {
            submitted_at,
            katakana_name: draft.katakana_name.clone(),
            kanji_name: draft.kanji_name.clone(),
            organization: draft.organization.clone(),
            incident_type,
            area: draft.area.clone(),
            address: or_none(&draft.address),
            map_link: draft.map_link.clone(),
            coordinates,
            photo,
            memo: or_none(&draft.memo),
        })
    }
}
