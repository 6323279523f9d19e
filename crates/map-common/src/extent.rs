//! Map extents and the zoom level lookup that sizes them.

use serde::{Deserialize, Serialize};

use crate::crs::SpatialReference;

/// Extent half-widths in meters, indexed by `zoom - 1`.
pub const HALF_WIDTHS: [f64; 15] = [
    100.0, 200.0, 300.0, 400.0, 500.0, 1000.0, 10000.0, 24000.0, 100000.0, 250000.0, 500000.0,
    750000.0, 1000000.0, 3000000.0, 10000000.0,
];

/// Zoom used when the request carries no usable zoom.
pub const DEFAULT_ZOOM: u8 = 5;

/// A zoom level in `1..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = HALF_WIDTHS.len() as u8;

    /// Validate a numeric zoom.
    pub fn new(zoom: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&zoom) {
            Some(Self(zoom as u8))
        } else {
            None
        }
    }

    /// Parse the `zoom` query value.
    ///
    /// Absent, non-integer and out-of-range values all fall back to
    /// [`DEFAULT_ZOOM`].
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Half-width of the extent in projected meters.
    pub fn half_width(&self) -> f64 {
        HALF_WIDTHS[(self.0 - 1) as usize]
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

/// An axis-aligned box in projected (Web Mercator) meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    #[serde(default)]
    pub spatial_reference: SpatialReference,
}

impl Extent {
    /// Create a new extent from corner coordinates.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
            spatial_reference: SpatialReference::web_mercator(),
        }
    }

    /// Square extent of `half_width` meters around a projected center.
    pub fn around(center: (f64, f64), half_width: f64) -> Self {
        let (x, y) = center;
        Self::new(x - half_width, y - half_width, x + half_width, y + half_width)
    }

    /// Extent sized for a zoom level.
    pub fn for_zoom(center: (f64, f64), zoom: ZoomLevel) -> Self {
        Self::around(center, zoom.half_width())
    }
}
