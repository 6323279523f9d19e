//! Service configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default port, overridden by `PORT`.
pub const DEFAULT_PORT: u16 = 9095;

pub const DEFAULT_GEOCODE_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

pub const DEFAULT_EXPORT_URL: &str = "https://utility.arcgisonline.com/arcgis/rest/services/Utilities/PrintingTools/GPServer/Export%20Web%20Map%20Task/execute";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "images";

/// Where failed requests are redirected.
pub const ERROR_IMAGE_PATH: &str = "/static/error.svg";

/// Runtime configuration for the static map service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Geocoder `findAddressCandidates` endpoint.
    pub geocode_url: String,

    /// Export web map task `execute` endpoint.
    pub export_url: String,

    /// Timeout applied to each outbound call.
    pub request_timeout: Duration,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Redirect target for any failed request.
    pub error_redirect: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            export_url: DEFAULT_EXPORT_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            error_redirect: ERROR_IMAGE_PATH.to_string(),
        }
    }
}
