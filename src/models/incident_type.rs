use serde::{Deserialize, Serialize};

/// What kind of damage the reporter observed.
/// `RescueNeeded` is the one variant with extra submit-time rules: the
/// affected-people count (or the unknown-count flag) becomes mandatory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentType {
    RescueNeeded,
    Fire,
    Flood,
    Landslide,
    BuildingDamage,
    Other,
}

impl IncidentType {
    /// Convert enum → storage string
    pub fn to_store_str(&self) -> &'static str {
        match self {
            IncidentType::RescueNeeded => "rescue-needed",
            IncidentType::Fire => "fire",
            IncidentType::Flood => "flood",
            IncidentType::Landslide => "landslide",
            IncidentType::BuildingDamage => "building-damage",
            IncidentType::Other => "other",
        }
    }

    /// Convert storage string → enum
    pub fn from_store_str(s: &str) -> Option<Self> {
        match s {
            "rescue-needed" => Some(IncidentType::RescueNeeded),
            "fire" => Some(IncidentType::Fire),
            "flood" => Some(IncidentType::Flood),
            "landslide" => Some(IncidentType::Landslide),
            "building-damage" => Some(IncidentType::BuildingDamage),
            "other" => Some(IncidentType::Other),
            _ => None,
        }
    }

    pub fn is_rescue_needed(&self) -> bool {
        matches!(self, IncidentType::RescueNeeded)
    }

    pub fn variants() -> &'static [&'static str] {
        &[
            "rescue-needed",
            "fire",
            "flood",
            "landslide",
            "building-damage",
            "other",
        ]
    }
}
