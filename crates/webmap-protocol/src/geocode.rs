//! Geocoder `findAddressCandidates` payloads.

use map_common::{LngLat, MapError, MapResult, SpatialReference};
use serde::Deserialize;

use crate::export::ServiceError;

/// Query parameters for a single-line address lookup.
///
/// Results are requested in Web Mercator so they can be used as a center
/// without reprojection.
pub fn find_address_query(address: &str) -> [(&'static str, String); 4] {
    [
        ("SingleLine", address.to_string()),
        ("f", "json".to_string()),
        ("maxLocations", "1".to_string()),
        ("outSR", map_common::crs::WKID_WEB_MERCATOR.to_string()),
    ]
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct CandidateLocation {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AddressCandidate {
    #[serde(default)]
    pub address: String,
    pub location: CandidateLocation,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FindAddressCandidatesResponse {
    #[serde(default)]
    pub spatial_reference: Option<SpatialReference>,
    #[serde(default)]
    pub candidates: Vec<AddressCandidate>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

impl FindAddressCandidatesResponse {
    /// Projected `(x, y)` of the first candidate.
    ///
    /// Locations in anything but Web Mercator are read as longitude/latitude
    /// and projected.
    pub fn best_location_xy(&self, address: &str) -> MapResult<(f64, f64)> {
        if let Some(error) = &self.error {
            return Err(MapError::GeocodeFailed(error.describe()));
        }
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| MapError::AddressNotFound(address.to_string()))?;

        let location = candidate.location;
        let web_mercator = self
            .spatial_reference
            .map(|sr| sr.is_web_mercator())
            .unwrap_or(false);

        if web_mercator {
            Ok((location.x, location.y))
        } else {
            Ok(projection::project(LngLat {
                lng: location.x,
                lat: location.y,
            }))
        }
    }
}
