//! Spherical Mercator projection.
//!
//! Maps geographic longitude/latitude (degrees) onto the Web Mercator plane
//! (EPSG:3857 / ESRI 102100) in meters. The sphere has the WGS84 semi-major
//! axis as its radius.
//!
//! Latitude is clamped just short of the poles, where `ln((1+sinφ)/(1-sinφ))`
//! diverges.

use std::f64::consts::PI;

use map_common::LngLat;

/// Sphere radius (meters).
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Largest absolute latitude accepted before projection (degrees).
pub const MAX_LATITUDE: f64 = 89.99999;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Project longitude/latitude in degrees to Web Mercator `(x, y)` meters.
pub fn lng_lat_to_xy(lng: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin_lat = (lat * DEG_TO_RAD).sin();

    let x = lng * DEG_TO_RAD * EARTH_RADIUS;
    let y = EARTH_RADIUS / 2.0 * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln();
    (x, y)
}

/// Project a [`LngLat`].
pub fn project(point: LngLat) -> (f64, f64) {
    lng_lat_to_xy(point.lng, point.lat)
}
