//! `GET /` static map handler.
//!
//! Every request ends in a `302 Found`: either to the image rendered by the
//! export task, or to the static error image.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Query},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use map_common::{Center, MapError, MapResult, ZoomLevel};
use tracing::{debug, info, instrument, warn};
use webmap_protocol::{ExportRequest, WebMapBuilder};

use crate::config::ERROR_IMAGE_PATH;
use crate::metrics;
use crate::state::AppState;

/// Query parameters of a static map request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMapParams {
    pub center: Option<String>,
    pub zoom: Option<String>,
    /// Every `markers` value, in request order.
    pub markers: Vec<String>,
    pub size: Option<String>,
    pub maptype: Option<String>,
    pub basemap: Option<String>,
    pub format: Option<String>,
    pub webmap: Option<String>,
}

impl StaticMapParams {
    /// Collect raw query pairs. `markers` may repeat; for every other key the
    /// last occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "markers" => {
                    params.markers.push(value);
                    continue;
                }
                "center" => &mut params.center,
                "zoom" => &mut params.zoom,
                "size" => &mut params.size,
                "maptype" => &mut params.maptype,
                "basemap" => &mut params.basemap,
                "format" => &mut params.format,
                "webmap" => &mut params.webmap,
                _ => continue,
            };
            *slot = Some(value);
        }
        params
    }
}

/// GET / - Render a static map and redirect to it
#[instrument(skip(state, query))]
pub async fn static_map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let params = StaticMapParams::from_pairs(query);
    let start = Instant::now();
    metrics::record_request();

    let result = render_static_map(&state, &params).await;
    metrics::record_duration(start.elapsed());

    match result {
        Ok(url) => {
            info!(url = %url, elapsed_ms = start.elapsed().as_millis() as u64, "Static map rendered");
            metrics::record_redirect();
            found(&url, &state.config.error_redirect)
        }
        Err(e) => {
            warn!(
                kind = e.kind(),
                error = %e,
                center = ?params.center,
                "Static map request failed"
            );
            metrics::record_failure(e.kind());
            found(&state.config.error_redirect, ERROR_IMAGE_PATH)
        }
    }
}

/// Resolve the center, build (or forward) the web map and export it.
pub async fn render_static_map(state: &AppState, params: &StaticMapParams) -> MapResult<String> {
    let request = match &params.webmap {
        Some(raw) => {
            debug!("Forwarding caller-supplied web map");
            ExportRequest::from_raw(raw, params.format.clone())?
        }
        None => {
            let center = params
                .center
                .as_deref()
                .ok_or_else(|| MapError::MissingParameter("center".to_string()))?;

            let xy = match Center::parse(center) {
                Center::Point(point) => projection::project(point),
                Center::Address(address) => state.provider.find_address(&address).await?,
            };

            let web_map = WebMapBuilder::new(xy)
                .zoom(ZoomLevel::from_param(params.zoom.as_deref()))
                .basemap_params(params.maptype.as_deref(), params.basemap.as_deref())
                .markers(&params.markers)
                .size(params.size.as_deref())
                .build();

            ExportRequest::from_web_map(&web_map, params.format.clone())?
        }
    };

    state.provider.export_web_map(&request).await
}

/// `302 Found` to `location`, or to `fallback` when `location` cannot be
/// carried in a header.
fn found(location: &str, fallback: &str) -> Response {
    let value = HeaderValue::from_str(location)
        .or_else(|e| {
            warn!(location, error = %e, "Redirect target is not a valid header value");
            metrics::record_failure("invalid_redirect");
            HeaderValue::from_str(fallback)
        })
        .unwrap_or_else(|_| HeaderValue::from_static(ERROR_IMAGE_PATH));

    (StatusCode::FOUND, [(header::LOCATION, value)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_collects_markers() {
        let params = StaticMapParams::from_pairs(pairs(&[
            ("center", "40,-75"),
            ("markers", "40,-75|color:purple"),
            ("markers", "41,-75"),
            ("zoom", "7"),
        ]));
        assert_eq!(params.center.as_deref(), Some("40,-75"));
        assert_eq!(params.zoom.as_deref(), Some("7"));
        assert_eq!(params.markers, vec!["40,-75|color:purple", "41,-75"]);
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let params = StaticMapParams::from_pairs(pairs(&[
            ("basemap", "streets"),
            ("basemap", "nova"),
            ("unknown", "x"),
        ]));
        assert_eq!(params.basemap.as_deref(), Some("nova"));
        assert_eq!(params.center, None);
    }

    #[test]
    fn test_unrepresentable_location_falls_back() {
        let response = found("https://example.com/out\n.png", "/static/error.svg");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/static/error.svg"
        );

        let response = found("bad\r\nurl", "also\nbad");
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            ERROR_IMAGE_PATH
        );
    }

    #[test]
    fn test_found_sets_location() {
        let response = found("/static/error.svg", ERROR_IMAGE_PATH);
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/static/error.svg"
        );
    }
}
