//! Coordinate reference system transformations.
//!
//! Implements the spherical Web Mercator forward projection used for every
//! geometry sent to the export provider.

pub mod mercator;

pub use mercator::{lng_lat_to_xy, project, EARTH_RADIUS, MAX_LATITUDE};
