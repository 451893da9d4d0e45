use crate::models::entry::EntryRecord;
use crate::utils::chunk_memo;
use crate::utils::table::{Column, Table};

/// Stable reference to one appended row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle {
    id: u64,
}

/// The live, ordered collection of submitted entries.
///
/// This collection is the single source of truth for "what currently
/// exists"; rendering is a one-directional projection of it and is never
/// read back. Order is insertion order; nothing reorders, merges or
/// deduplicates rows.
#[derive(Debug, Default)]
pub struct EntryTable {
    rows: Vec<(u64, EntryRecord)>,
    next_id: u64,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry at the end.
    pub fn append(&mut self, record: EntryRecord) -> RowHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push((id, record));
        RowHandle { id }
    }

    /// Remove exactly one row. Removing an already-removed handle is a
    /// no-op; the caller persists afterwards either way.
    pub fn remove(&mut self, handle: RowHandle) {
        self.rows.retain(|(id, _)| *id != handle.id);
    }

    /// Ordered copy of the current records.
    pub fn snapshot(&self) -> Vec<EntryRecord> {
        self.rows.iter().map(|(_, rec)| rec.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Handle for the row at a zero-based position.
    pub fn handle_at(&self, index: usize) -> Option<RowHandle> {
        self.rows.get(index).map(|(id, _)| RowHandle { id: *id })
    }

    pub fn record_at(&self, index: usize) -> Option<&EntryRecord> {
        self.rows.get(index).map(|(_, rec)| rec)
    }

    /// Render the table for the terminal. Memo cells are broken after every
    /// 10th character; the verbatim memo stays on the record for the detail
    /// view and for persistence.
    pub fn render(&self, separator_char: &str) -> String {
        let mut table = Table::new(
            [
                "#", "Submitted", "Kana", "Name", "Org", "Type", "Area", "Address", "Lat/Lon",
                "Photo", "Memo",
            ]
            .iter()
            .map(|h| Column {
                header: h.to_string(),
            })
            .collect(),
        );

        for (i, (_, rec)) in self.rows.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                rec.submitted_at.clone(),
                rec.katakana_name.clone(),
                rec.kanji_name.clone(),
                rec.organization.clone(),
                rec.incident_type.to_store_str().to_string(),
                rec.area.clone(),
                rec.address.clone(),
                rec.coordinates.render(),
                rec.photo.render(),
                chunk_memo(&rec.memo),
            ]);
        }

        table.render(separator_char)
    }
}
