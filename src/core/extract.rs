//! Coordinate extraction from map links.

use crate::models::coords::Coordinates;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// First `@<lat>,<lon>` occurrence in a picker-produced link, e.g.
    /// `https://www.google.com/maps/@35.6812,139.7671,15z`.
    /// Signed decimals only; geographic range is not checked because the
    /// values are kept verbatim for display, never computed with.
    static ref LAT_LON: Regex =
        Regex::new(r"@(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)").unwrap();
}

/// Derive coordinates from a map link.
/// Empty input short-circuits to `Unknown`; so does any link without the
/// `@lat,lon` pattern. Only the first occurrence counts.
pub fn extract(map_link: &str) -> Coordinates {
    if map_link.is_empty() {
        return Coordinates::Unknown;
    }

    match LAT_LON.captures(map_link) {
        Some(caps) => Coordinates::point(&caps[1], &caps[2]),
        None => Coordinates::Unknown,
    }
}
