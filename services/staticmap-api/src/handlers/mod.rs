//! HTTP request handlers for the static map API.

pub mod health;
pub mod staticmap;

pub use health::{health_handler, metrics_handler};
pub use staticmap::{render_static_map, static_map_handler, StaticMapParams};
