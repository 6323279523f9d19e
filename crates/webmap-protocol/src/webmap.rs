//! Web map JSON document accepted by the export web map task.

use std::fmt;
use std::str::FromStr;

use map_common::Extent;
use serde::{Serialize, Serializer};

use crate::basemap::BasemapStyle;
use crate::markers::GraphicsLayer;

pub const DEFAULT_OUTPUT_WIDTH: u32 = 800;
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 600;
pub const DEFAULT_DPI: u32 = 96;

/// Id of the basemap operational layer.
pub const BASEMAP_LAYER_ID: &str = "basemap";

/// The full document sent as `Web_Map_as_JSON`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebMap {
    pub map_options: MapOptions,
    pub operational_layers: Vec<OperationalLayer>,
    pub export_options: ExportOptions,
}

impl WebMap {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn basemap(&self) -> Option<&BasemapLayer> {
        self.operational_layers.iter().find_map(|layer| match layer {
            OperationalLayer::Basemap(basemap) => Some(basemap),
            OperationalLayer::Graphics(_) => None,
        })
    }

    pub fn graphics(&self) -> Option<&GraphicsLayer> {
        self.operational_layers.iter().find_map(|layer| match layer {
            OperationalLayer::Graphics(graphics) => Some(graphics),
            OperationalLayer::Basemap(_) => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub show_attribution: bool,
    pub extent: Extent,
}

impl MapOptions {
    /// Attribution is always turned off for static images.
    pub fn for_extent(extent: Extent) -> Self {
        Self {
            show_attribution: false,
            extent,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub output_size: OutputSize,
    pub dpi: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_size: OutputSize::default(),
            dpi: DEFAULT_DPI,
        }
    }
}

// ============================================================================
// Output size
// ============================================================================

/// Output image size in pixels, serialized as `[width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl Default for OutputSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_OUTPUT_WIDTH,
            height: DEFAULT_OUTPUT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid size '{0}': expected WIDTHxHEIGHT with positive integers")]
pub struct SizeParseError(pub String);

impl FromStr for OutputSize {
    type Err = SizeParseError;

    /// Parse `WIDTHxHEIGHT`, e.g. `640x480`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SizeParseError(s.to_string());
        let (w, h) = s.split_once('x').ok_or_else(err)?;
        let width: u32 = w.trim().parse().map_err(|_| err())?;
        let height: u32 = h.trim().parse().map_err(|_| err())?;
        if width == 0 || height == 0 {
            return Err(err());
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Serialize for OutputSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.width, self.height].serialize(serializer)
    }
}

// ============================================================================
// Operational layers
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum OperationalLayer {
    Basemap(BasemapLayer),
    Graphics(GraphicsLayer),
}

/// Basemap layer reference.
///
/// Tiled map services carry `layerType` + `url`; vector tile basemaps carry
/// `type` + `styleUrl`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasemapLayer {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_type: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_url: Option<String>,
    pub opacity: f64,
}

impl BasemapLayer {
    pub fn tiled(url: impl Into<String>) -> Self {
        Self {
            id: BASEMAP_LAYER_ID.to_string(),
            layer_type: Some("ArcGISTiledMapServiceLayer".to_string()),
            kind: None,
            url: Some(url.into()),
            style_url: None,
            opacity: 1.0,
        }
    }

    pub fn vector_tile(style_url: impl Into<String>) -> Self {
        Self {
            id: BASEMAP_LAYER_ID.to_string(),
            layer_type: None,
            kind: Some("VectorTileLayer".to_string()),
            url: None,
            style_url: Some(style_url.into()),
            opacity: 1.0,
        }
    }

    pub fn for_style(style: BasemapStyle) -> Self {
        if style.is_tiled() {
            Self::tiled(style.url())
        } else {
            Self::vector_tile(style.url())
        }
    }
}
