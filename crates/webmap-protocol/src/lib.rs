//! Web map protocol for the provider's export web map task.
//!
//! Supports:
//! - Web map JSON documents (map options, operational layers, export options)
//! - Marker overlays encoded as picture-marker point feature collections
//! - Basemap style keywords and their service / vector style URLs
//! - Geocoder and export task request/response payloads

pub mod basemap;
pub mod builder;
pub mod export;
pub mod geocode;
pub mod icons;
pub mod markers;
pub mod webmap;

pub use basemap::BasemapStyle;
pub use builder::WebMapBuilder;
pub use export::{ExportRequest, ExportResponse};
pub use geocode::{AddressCandidate, FindAddressCandidatesResponse};
pub use icons::{icon_for_color, Icon};
pub use markers::{encode_markers, parse_markers, GraphicsLayer, Marker, MarkerParseError};
pub use webmap::{
    BasemapLayer, ExportOptions, MapOptions, OperationalLayer, OutputSize, SizeParseError, WebMap,
};
