//! Common types and utilities shared across the static map proxy crates.

pub mod center;
pub mod crs;
pub mod error;
pub mod extent;

pub use center::{Center, LngLat};
pub use crs::{CrsCode, SpatialReference};
pub use error::{MapError, MapResult};
pub use extent::{Extent, ZoomLevel};
