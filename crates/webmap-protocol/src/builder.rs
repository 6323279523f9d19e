//! Assembles a [`WebMap`] from static map request parameters.

use map_common::{Extent, ZoomLevel};
use tracing::warn;

use crate::basemap::BasemapStyle;
use crate::markers::{encode_markers, parse_markers};
use crate::webmap::{BasemapLayer, ExportOptions, MapOptions, OperationalLayer, OutputSize, WebMap};

/// Builder for the web map document.
///
/// ```
/// use map_common::ZoomLevel;
/// use webmap_protocol::{BasemapStyle, WebMapBuilder};
///
/// let web_map = WebMapBuilder::new((0.0, 0.0))
///     .zoom(ZoomLevel::new(3).unwrap())
///     .basemap(BasemapStyle::Satellite)
///     .build();
/// assert_eq!(web_map.map_options.extent.xmax, 300.0);
/// ```
#[derive(Debug, Clone)]
pub struct WebMapBuilder {
    center: (f64, f64),
    zoom: ZoomLevel,
    basemap: BasemapStyle,
    markers: Vec<String>,
    output_size: OutputSize,
}

impl WebMapBuilder {
    /// Start from a center in projected (Web Mercator) meters.
    pub fn new(center: (f64, f64)) -> Self {
        Self {
            center,
            zoom: ZoomLevel::default(),
            basemap: BasemapStyle::Default,
            markers: Vec::new(),
            output_size: OutputSize::default(),
        }
    }

    pub fn zoom(mut self, zoom: ZoomLevel) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn basemap(mut self, style: BasemapStyle) -> Self {
        self.basemap = style;
        self
    }

    /// Resolve the basemap from the `maptype` and `basemap` parameters.
    pub fn basemap_params(self, maptype: Option<&str>, basemap: Option<&str>) -> Self {
        self.basemap(BasemapStyle::from_params(maptype, basemap))
    }

    /// Raw marker descriptors, in request order.
    pub fn markers<S: AsRef<str>>(mut self, descriptors: &[S]) -> Self {
        self.markers = descriptors.iter().map(|d| d.as_ref().to_string()).collect();
        self
    }

    /// Apply a `WIDTHxHEIGHT` size. An unparsable size keeps the default.
    pub fn size(mut self, size: Option<&str>) -> Self {
        if let Some(raw) = size {
            match raw.parse::<OutputSize>() {
                Ok(parsed) => self.output_size = parsed,
                Err(e) => warn!(size = raw, error = %e, "Ignoring invalid output size"),
            }
        }
        self
    }

    pub fn build(self) -> WebMap {
        let extent = Extent::for_zoom(self.center, self.zoom);

        let mut operational_layers = vec![OperationalLayer::Basemap(BasemapLayer::for_style(
            self.basemap,
        ))];
        if !self.markers.is_empty() {
            let markers = parse_markers(&self.markers);
            operational_layers.push(OperationalLayer::Graphics(encode_markers(&markers)));
        }

        WebMap {
            map_options: MapOptions::for_extent(extent),
            operational_layers,
            export_options: ExportOptions {
                output_size: self.output_size,
                ..ExportOptions::default()
            },
        }
    }
}
