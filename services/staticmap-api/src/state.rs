//! Application state for the static map API.

use std::sync::Arc;

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::ServiceConfig;
use crate::provider::{ArcGisProvider, MapProvider};

/// Shared application state.
pub struct AppState {
    pub config: ServiceConfig,

    /// Geocoder and export task client.
    pub provider: Arc<dyn MapProvider>,

    /// Prometheus handle, present when a recorder is installed.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state talking to the configured ArcGIS endpoints.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let provider = ArcGisProvider::new(&config)?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    pub fn with_provider(config: ServiceConfig, provider: Arc<dyn MapProvider>) -> Self {
        Self {
            config,
            provider,
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}
