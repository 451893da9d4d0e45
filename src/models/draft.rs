use super::incident_type::IncidentType;
use serde::{Deserialize, Serialize};

/// The single in-progress form state.
///
/// A flat field map, overwritten in full on every mutation and persisted
/// under one fixed key. The affected-count pair exists only here: it is
/// consumed by submit-time validation and never lands in an entry.
///
/// Field names on the wire are fixed (`katakanaName`, `mapLink`, ...);
/// `#[serde(default)]` keeps older or hand-edited values loadable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    pub katakana_name: String,
    pub kanji_name: String,
    pub organization: String,
    /// Raw incident-type code; empty string when not yet chosen.
    pub incident_type: String,
    pub area: String,
    pub address: String,
    pub map_link: String,
    pub memo: String,
    pub unknown_people: bool,
    pub people_count: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    /// Set the affected-people count. Clears the unknown flag: at most one
    /// of the pair is authoritative.
    pub fn set_people_count(&mut self, count: &str) {
        self.people_count = count.to_string();
        self.unknown_people = false;
    }

    /// Mark the affected-people count as unknown. Clears any entered
    /// count; at most one of the pair stays authoritative.
    pub fn set_unknown_people(&mut self, flag: bool) {
        self.unknown_people = flag;
        if flag {
            self.people_count.clear();
        }
    }

    pub fn incident_type(&self) -> Option<IncidentType> {
        IncidentType::from_store_str(&self.incident_type)
    }

    /// Everything still blocking submission, in field order.
    /// An empty result is the "submit button enabled" state.
    pub fn unmet_requirements(&self) -> Vec<String> {
        let mut unmet = Vec::new();

        if self.katakana_name.trim().is_empty() {
            unmet.push("reporter name (kana) is required".to_string());
        }

        match self.incident_type() {
            None if self.incident_type.is_empty() => {
                unmet.push("incident type is required".to_string());
            }
            None => {
                unmet.push(format!("unknown incident type '{}'", self.incident_type));
            }
            Some(kind) if kind.is_rescue_needed() => {
                if !self.unknown_people {
                    match self.people_count.trim() {
                        "" => unmet.push(
                            "rescue-needed requires a people count or the unknown-people flag"
                                .to_string(),
                        ),
                        count if count.parse::<u32>().is_err() => {
                            unmet.push(format!("invalid people count '{}'", count));
                        }
                        _ => {}
                    }
                }
            }
            Some(_) => {}
        }

        if self.area.trim().is_empty() {
            unmet.push("area is required".to_string());
        }

        unmet
    }

    pub fn is_ready(&self) -> bool {
        self.unmet_requirements().is_empty()
    }
}
