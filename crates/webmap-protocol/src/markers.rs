//! Marker overlays.
//!
//! A marker descriptor is a `|`-separated list of tokens, each either a
//! `lat,lng` pair or a `key:value` attribute:
//!
//! ```text
//! 47.6,-122.3|color:purple|width:20
//! ```
//!
//! Parsed markers are rendered as picture-marker point features inside a
//! single feature collection layer that the export task draws above the
//! basemap.

use map_common::SpatialReference;
use projection::lng_lat_to_xy;
use serde::Serialize;
use tracing::{debug, warn};

use crate::icons::icon_for_color;

/// Id of the overlay layer in the web map.
pub const GRAPHICS_LAYER_ID: &str = "map_graphics";

pub const DEFAULT_WIDTH: f64 = 12.0;
pub const DEFAULT_HEIGHT: f64 = 24.0;
pub const DEFAULT_OFFSET: f64 = 0.0;
pub const DEFAULT_ANGLE: f64 = 0.0;

const GEOMETRY_POINT: &str = "esriGeometryPoint";
const PICTURE_MARKER_SYMBOL: &str = "esriPMS";

// ============================================================================
// Parsing
// ============================================================================

/// A parsed marker descriptor.
///
/// Symbol attributes keep the raw string from the request; they are coerced to
/// numbers when the feature is encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marker {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub color: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub xoffset: Option<String>,
    pub yoffset: Option<String>,
    pub angle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkerParseError {
    #[error("Invalid marker coordinate '{token}': expected 'lat,lng'")]
    InvalidCoordinate { token: String },
}

impl Marker {
    /// Parse one descriptor.
    ///
    /// A token containing a comma is always read as `lat,lng`, otherwise a
    /// token containing a colon is read as `key:value`. Tokens matching
    /// neither are skipped, as are unknown attribute keys.
    pub fn parse(descriptor: &str) -> Result<Self, MarkerParseError> {
        let mut marker = Marker::default();

        for token in descriptor.split('|') {
            let location: Vec<&str> = token.split(',').collect();
            if location.len() > 1 {
                let invalid = || MarkerParseError::InvalidCoordinate {
                    token: token.to_string(),
                };
                marker.latitude = Some(parse_coordinate(location[0]).ok_or_else(invalid)?);
                marker.longitude = Some(parse_coordinate(location[1]).ok_or_else(invalid)?);
                continue;
            }

            let attribute: Vec<&str> = token.split(':').collect();
            if attribute.len() > 1 {
                marker.set_attribute(attribute[0], attribute[1]);
            }
        }

        Ok(marker)
    }

    fn set_attribute(&mut self, key: &str, value: &str) {
        let slot = match key {
            "color" => &mut self.color,
            "width" => &mut self.width,
            "height" => &mut self.height,
            "xoffset" => &mut self.xoffset,
            "yoffset" => &mut self.yoffset,
            "angle" => &mut self.angle,
            _ => {
                debug!(key, value, "Ignoring unknown marker attribute");
                return;
            }
        };
        *slot = Some(value.to_string());
    }

    /// `(longitude, latitude)` if both were given.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.longitude?, self.latitude?))
    }

    /// Render this marker as a point feature, or `None` without a position.
    pub fn to_feature(&self) -> Option<Feature> {
        let (lng, lat) = self.position()?;
        let (x, y) = lng_lat_to_xy(lng, lat);
        let icon = icon_for_color(self.color.as_deref());

        Some(Feature {
            geometry: PointGeometry {
                x,
                y,
                spatial_reference: SpatialReference::web_mercator(),
            },
            symbol: PictureMarkerSymbol {
                symbol_type: PICTURE_MARKER_SYMBOL,
                url: format!("{}.png", self.color.as_deref().unwrap_or("default")),
                content_type: icon.content_type,
                width: numeric_attr("width", &self.width, DEFAULT_WIDTH),
                height: numeric_attr("height", &self.height, DEFAULT_HEIGHT),
                xoffset: numeric_attr("xoffset", &self.xoffset, DEFAULT_OFFSET),
                yoffset: numeric_attr("yoffset", &self.yoffset, DEFAULT_OFFSET),
                angle: numeric_attr("angle", &self.angle, DEFAULT_ANGLE),
                image_data: icon.image_data,
            },
        })
    }
}

fn parse_coordinate(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn numeric_attr(name: &str, raw: &Option<String>, default: f64) -> f64 {
    let Some(raw) = raw.as_deref() else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(attribute = name, value = raw, default, "Non-numeric marker attribute, using default");
            default
        }
    }
}

/// Parse every descriptor, dropping (and logging) the malformed ones.
pub fn parse_markers<S: AsRef<str>>(descriptors: &[S]) -> Vec<Marker> {
    descriptors
        .iter()
        .filter_map(|d| match Marker::parse(d.as_ref()) {
            Ok(marker) => Some(marker),
            Err(e) => {
                warn!(descriptor = d.as_ref(), error = %e, "Dropping malformed marker");
                None
            }
        })
        .collect()
}

// ============================================================================
// Feature layer schema
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointGeometry {
    pub x: f64,
    pub y: f64,
    pub spatial_reference: SpatialReference,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PictureMarkerSymbol {
    #[serde(rename = "type")]
    pub symbol_type: &'static str,
    pub url: String,
    pub content_type: &'static str,
    pub width: f64,
    pub height: f64,
    pub xoffset: f64,
    pub yoffset: f64,
    pub angle: f64,
    pub image_data: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Feature {
    pub geometry: PointGeometry,
    pub symbol: PictureMarkerSymbol,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayerDefinition {
    pub name: String,
    pub geometry_type: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    pub geometry_type: &'static str,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLayer {
    pub layer_definition: LayerDefinition,
    pub feature_set: FeatureSet,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureCollection {
    pub layers: Vec<FeatureLayer>,
}

/// The marker overlay operational layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphicsLayer {
    pub id: String,
    pub opacity: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub feature_collection: FeatureCollection,
}

impl GraphicsLayer {
    /// Wrap point features in the fixed overlay envelope.
    pub fn with_features(features: Vec<Feature>) -> Self {
        Self {
            id: GRAPHICS_LAYER_ID.to_string(),
            opacity: 1.0,
            min_scale: 0.0,
            max_scale: 0.0,
            feature_collection: FeatureCollection {
                layers: vec![FeatureLayer {
                    layer_definition: LayerDefinition {
                        name: "pointLayer".to_string(),
                        geometry_type: GEOMETRY_POINT,
                    },
                    feature_set: FeatureSet {
                        geometry_type: GEOMETRY_POINT,
                        features,
                    },
                }],
            },
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.feature_collection.layers[0].feature_set.features
    }
}

/// Encode markers into the overlay layer. Markers without a position are skipped.
pub fn encode_markers(markers: &[Marker]) -> GraphicsLayer {
    let features = markers
        .iter()
        .filter_map(|marker| {
            let feature = marker.to_feature();
            if feature.is_none() {
                warn!(?marker, "Marker has no position, skipping");
            }
            feature
        })
        .collect();

    GraphicsLayer::with_features(features)
}
