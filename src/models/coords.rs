/// Display sentinel for a missing or unparseable coordinate pair.
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// Coordinates derived from a map link. Never entered directly.
///
/// Lat/lon are kept as the decimal-degree strings found in the link,
/// verbatim; the upstream map picker is trusted to produce well-formed
/// values, so no range validation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coordinates {
    Point { lat: String, lon: String },
    Unknown,
}

impl Coordinates {
    pub fn point(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Coordinates::Point {
            lat: lat.into(),
            lon: lon.into(),
        }
    }

    /// Rendered cell text: `"35.6812, 139.7671"` or the unknown sentinel.
    pub fn render(&self) -> String {
        match self {
            Coordinates::Point { lat, lon } => format!("{}, {}", lat, lon),
            Coordinates::Unknown => UNKNOWN_SENTINEL.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Coordinates::Unknown)
    }
}
