//! Map capability boundary.
//!
//! The map picker and the reverse geocoder are external collaborators: the
//! picker yields a point, the geocoder answers with a formatted address (or
//! doesn't). This module models that boundary; nothing here talks to a
//! network.

pub mod session;

use crate::errors::{AppError, AppResult};

/// A point picked on the map surface. Lat/lon are kept as the strings the
/// picker produced so the link, and everything later derived from it, stays
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoPoint {
    pub lat: String,
    pub lon: String,
}

impl GeoPoint {
    /// Validate and wrap picker output. Values must be signed decimals;
    /// geographic range is the picker's problem.
    pub fn parse(lat: &str, lon: &str) -> AppResult<Self> {
        for v in [lat, lon] {
            if v.parse::<f64>().is_err() {
                return Err(AppError::InvalidCoordinate(v.to_string()));
            }
        }
        Ok(Self {
            lat: lat.to_string(),
            lon: lon.to_string(),
        })
    }

    /// The shareable link the picker hands out for a point.
    pub fn map_link(&self) -> String {
        format!("https://www.google.com/maps/@{},{},15z", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeStatus {
    Ok,
    NoResult,
}

#[derive(Debug, Clone)]
pub struct GeocodeResult {
    pub status: GeocodeStatus,
    pub formatted_address: Option<String>,
}

/// Reverse geocoding capability: point in, formatted address out.
pub trait Geocoder {
    fn reverse(&self, point: &GeoPoint) -> GeocodeResult;
}

/// Geocoder whose answer is supplied up front (the CLI's `--address`
/// argument plays the external service's response). No argument means the
/// lookup found nothing.
pub struct ProvidedGeocoder {
    pub address: Option<String>,
}

impl Geocoder for ProvidedGeocoder {
    fn reverse(&self, _point: &GeoPoint) -> GeocodeResult {
        match &self.address {
            Some(addr) if !addr.trim().is_empty() => GeocodeResult {
                status: GeocodeStatus::Ok,
                formatted_address: Some(addr.clone()),
            },
            _ => GeocodeResult {
                status: GeocodeStatus::NoResult,
                formatted_address: None,
            },
        }
    }
}
