//! Static Map API Service Library
//!
//! Turns a static map query (center, zoom, markers, basemap, size) into a web
//! map document, has the ArcGIS export web map task render it, and redirects
//! the caller to the resulting image.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod provider;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use state::AppState;

/// Build the service router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::static_map_handler))
        // Health and metrics
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        // Error image and other assets
        .nest_service("/static", static_files)
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
