//! Outbound calls to the geocoder and the export web map task.

use async_trait::async_trait;
use map_common::{MapError, MapResult};
use reqwest::Client;
use tracing::{debug, instrument};
use webmap_protocol::geocode::find_address_query;
use webmap_protocol::{ExportRequest, ExportResponse, FindAddressCandidatesResponse};

use crate::config::ServiceConfig;

/// The two remote operations a static map request depends on.
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// Resolve a free-text address to projected (Web Mercator) `(x, y)`.
    async fn find_address(&self, address: &str) -> MapResult<(f64, f64)>;

    /// Run the export task and return the rendered image URL.
    async fn export_web_map(&self, request: &ExportRequest) -> MapResult<String>;
}

/// [`MapProvider`] backed by the ArcGIS REST endpoints.
pub struct ArcGisProvider {
    client: Client,
    geocode_url: String,
    export_url: String,
}

impl ArcGisProvider {
    pub fn new(config: &ServiceConfig) -> MapResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| MapError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            geocode_url: config.geocode_url.clone(),
            export_url: config.export_url.clone(),
        })
    }
}

fn transport_error(err: reqwest::Error) -> MapError {
    if err.is_timeout() {
        MapError::Timeout
    } else {
        MapError::Upstream(err.to_string())
    }
}

#[async_trait]
impl MapProvider for ArcGisProvider {
    #[instrument(skip(self), fields(url = %self.geocode_url))]
    async fn find_address(&self, address: &str) -> MapResult<(f64, f64)> {
        debug!("Geocoding address");

        let response = self
            .client
            .get(&self.geocode_url)
            .query(&find_address_query(address))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(MapError::GeocodeFailed(format!(
                "geocoder returned {}",
                response.status()
            )));
        }

        let body: FindAddressCandidatesResponse =
            response.json().await.map_err(transport_error)?;
        debug!(candidates = body.candidates.len(), "Geocoder responded");

        body.best_location_xy(address)
    }

    #[instrument(skip(self, request), fields(url = %self.export_url, format = ?request.format))]
    async fn export_web_map(&self, request: &ExportRequest) -> MapResult<String> {
        debug!(bytes = request.web_map_json.len(), "Submitting web map for export");

        let response = self
            .client
            .post(&self.export_url)
            .form(&request.form_fields())
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(MapError::ExportFailed(format!(
                "export task returned {}",
                response.status()
            )));
        }

        let body: ExportResponse = response.json().await.map_err(transport_error)?;
        body.into_result_url()
    }
}
