//! Coordinate Reference System identifiers as used by the export provider.

use serde::{Deserialize, Serialize};

/// Well-known ESRI WKID for Web Mercator (auxiliary sphere).
pub const WKID_WEB_MERCATOR: u32 = 102100;
/// EPSG code the provider reports as `latestWkid` for Web Mercator.
pub const WKID_WEB_MERCATOR_LATEST: u32 = 3857;
/// WGS84 geographic.
pub const WKID_WGS84: u32 = 4326;

/// CRS codes the proxy needs to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsCode {
    /// WGS84 Geographic (lng/lat in degrees)
    Epsg4326,
    /// Web Mercator (meters)
    Epsg3857,
}

impl CrsCode {
    /// Map a provider WKID onto a CRS code.
    ///
    /// Accepts both the legacy ESRI ids (102100, 102113, 900913) and the
    /// EPSG ids for Web Mercator.
    pub fn from_wkid(wkid: u32) -> Option<Self> {
        match wkid {
            WKID_WGS84 => Some(CrsCode::Epsg4326),
            WKID_WEB_MERCATOR | WKID_WEB_MERCATOR_LATEST | 102113 | 900913 => {
                Some(CrsCode::Epsg3857)
            }
            _ => None,
        }
    }
}

/// Spatial reference object in the provider's JSON schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialReference {
    pub wkid: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_wkid: Option<u32>,
}

impl SpatialReference {
    /// The fixed Web Mercator identifiers stamped on every projected geometry.
    pub const fn web_mercator() -> Self {
        Self {
            wkid: WKID_WEB_MERCATOR,
            latest_wkid: Some(WKID_WEB_MERCATOR_LATEST),
        }
    }

    /// Resolve the CRS, preferring `latestWkid` when present.
    pub fn crs(&self) -> Option<CrsCode> {
        self.latest_wkid
            .and_then(CrsCode::from_wkid)
            .or_else(|| CrsCode::from_wkid(self.wkid))
    }

    pub fn is_web_mercator(&self) -> bool {
        self.crs() == Some(CrsCode::Epsg3857)
    }
}

impl Default for SpatialReference {
    fn default() -> Self {
        Self::web_mercator()
    }
}
