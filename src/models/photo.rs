use crate::utils::text::NONE_SENTINEL;
use std::path::Path;

/// Reference to a locally-held photo.
///
/// A locator written in an earlier session is not guaranteed to still
/// resolve, so reloaded records are re-probed and tagged instead of
/// presenting a dangling reference as valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoRef {
    /// No photo was attached.
    None,
    /// Locator verified present in this session.
    Attached(String),
    /// Locator restored from storage that no longer resolves.
    /// Kept verbatim for re-persistence; rendered as the none fallback.
    Missing(String),
}

impl PhotoRef {
    /// Classify a locator string, probing the filesystem.
    pub fn from_locator(locator: &str) -> Self {
        if locator.is_empty() {
            PhotoRef::None
        } else if Path::new(locator).exists() {
            PhotoRef::Attached(locator.to_string())
        } else {
            PhotoRef::Missing(locator.to_string())
        }
    }

    /// Locator as persisted (empty string when no photo).
    pub fn locator(&self) -> &str {
        match self {
            PhotoRef::None => "",
            PhotoRef::Attached(loc) | PhotoRef::Missing(loc) => loc,
        }
    }

    /// Rendered cell text; only a verified locator is shown.
    pub fn render(&self) -> String {
        match self {
            PhotoRef::Attached(loc) => loc.clone(),
            PhotoRef::None | PhotoRef::Missing(_) => NONE_SENTINEL.to_string(),
        }
    }
}
