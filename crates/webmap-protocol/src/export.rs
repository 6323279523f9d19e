//! Export web map task request and response payloads.

use map_common::{MapError, MapResult};
use serde::Deserialize;

use crate::webmap::WebMap;

/// Layout that renders the map frame with no surrounding page furniture.
pub const LAYOUT_MAP_ONLY: &str = "MAP_ONLY";

/// Form-encoded `execute` request for the export task.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub web_map_json: String,
    /// Output format, forwarded verbatim when present.
    pub format: Option<String>,
    pub layout_template: String,
}

impl ExportRequest {
    pub fn from_web_map(web_map: &WebMap, format: Option<String>) -> MapResult<Self> {
        Ok(Self {
            web_map_json: web_map.to_json()?,
            format,
            layout_template: LAYOUT_MAP_ONLY.to_string(),
        })
    }

    /// Forward a caller-supplied web map document.
    ///
    /// The document is only checked to be JSON; it is sent as given.
    pub fn from_raw(raw: &str, format: Option<String>) -> MapResult<Self> {
        serde_json::from_str::<serde_json::Value>(raw)
            .map_err(|e| MapError::invalid_parameter("webmap", e.to_string()))?;
        Ok(Self {
            web_map_json: raw.to_string(),
            format,
            layout_template: LAYOUT_MAP_ONLY.to_string(),
        })
    }

    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("Web_Map_as_JSON", self.web_map_json.as_str())];
        if let Some(format) = &self.format {
            fields.push(("Format", format.as_str()));
        }
        fields.push(("Layout_Template", self.layout_template.as_str()));
        fields.push(("f", "json"));
        fields
    }
}

/// Error envelope returned by ArcGIS REST endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ServiceError {
    pub fn describe(&self) -> String {
        if self.details.is_empty() {
            format!("{} ({})", self.message, self.code)
        } else {
            format!("{} ({}): {}", self.message, self.code, self.details.join("; "))
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    #[serde(default)]
    pub param_name: Option<String>,
    #[serde(default)]
    pub value: Option<ExportValue>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExportValue {
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of the export task `execute` call.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExportResponse {
    #[serde(default)]
    pub results: Vec<ExportResult>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

impl ExportResponse {
    /// The rendered image URL, or [`MapError::ExportFailed`].
    pub fn into_result_url(self) -> MapResult<String> {
        if let Some(error) = self.error {
            return Err(MapError::ExportFailed(error.describe()));
        }
        self.results
            .into_iter()
            .next()
            .and_then(|result| result.value)
            .and_then(|value| value.url)
            .ok_or_else(|| MapError::ExportFailed("response contained no output URL".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WebMapBuilder;

    #[test]
    fn test_form_fields_with_format() {
        let web_map = WebMapBuilder::new((0.0, 0.0)).build();
        let request = ExportRequest::from_web_map(&web_map, Some("PNG32".into())).unwrap();
        let fields = request.form_fields();
        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ["Web_Map_as_JSON", "Format", "Layout_Template", "f"]);
        assert_eq!(fields[1].1, "PNG32");
        assert_eq!(fields[2].1, "MAP_ONLY");
        assert_eq!(fields[3].1, "json");
    }

    #[test]
    fn test_form_fields_without_format() {
        let request = ExportRequest::from_raw("{}", None).unwrap();
        assert!(request.form_fields().iter().all(|(k, _)| *k != "Format"));
    }

    #[test]
    fn test_raw_web_map_forwarded_verbatim() {
        let raw = r#"{"mapOptions": {"extent": {}},  "operationalLayers": []}"#;
        let request = ExportRequest::from_raw(raw, None).unwrap();
        assert_eq!(request.web_map_json, raw);
    }

    #[test]
    fn test_raw_web_map_must_be_json() {
        let err = ExportRequest::from_raw("{not json", None).unwrap_err();
        assert_eq!(err.kind(), "invalid_parameter");
    }

    #[test]
    fn test_result_url() {
        let response: ExportResponse = serde_json::from_str(
            r#"{"results":[{"paramName":"Output_File","dataType":"GPDataFile",
                "value":{"url":"https://example.com/out.png"}}],"messages":[]}"#,
        )
        .unwrap();
        assert_eq!(response.into_result_url().unwrap(), "https://example.com/out.png");
    }

    #[test]
    fn test_error_envelope() {
        let response: ExportResponse = serde_json::from_str(
            r#"{"error":{"code":400,"message":"Unable to complete operation.","details":["bad layer"]}}"#,
        )
        .unwrap();
        let err = response.into_result_url().unwrap_err();
        assert!(matches!(err, MapError::ExportFailed(ref m) if m.contains("bad layer")));
    }

    #[test]
    fn test_empty_results() {
        let response: ExportResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert_eq!(response.into_result_url().unwrap_err().kind(), "export_failed");
    }
}
