//! End-to-end tests for building web map documents from request parameters.

use map_common::{Center, ZoomLevel};
use projection::lng_lat_to_xy;
use webmap_protocol::basemap::BasemapStyle;
use webmap_protocol::markers::{Marker, DEFAULT_HEIGHT};
use webmap_protocol::{ExportRequest, OperationalLayer, OutputSize, WebMapBuilder};

fn center_xy(center: &str) -> (f64, f64) {
    let [lng, lat] = Center::parse(center).as_pair().expect("numeric center");
    lng_lat_to_xy(lng, lat)
}

// ============================================================================
// Request scenarios
// ============================================================================

#[test]
fn test_streets_scenario() {
    // The center resolver swaps the pair, so the projector sees lng=47.6, lat=-122.3.
    let (x, y) = center_xy("-122.3,47.6");
    assert_eq!((x, y), lng_lat_to_xy(47.6, -122.3));

    let web_map = WebMapBuilder::new((x, y))
        .zoom(ZoomLevel::from_param(Some("5")))
        .basemap_params(None, Some("streets"))
        .build();

    let extent = web_map.map_options.extent;
    assert_eq!(extent.xmin, x - 500.0);
    assert_eq!(extent.xmax, x + 500.0);
    assert_eq!(extent.ymin, y - 500.0);
    assert_eq!(extent.ymax, y + 500.0);
    assert!(extent.ymin.is_finite());

    assert_eq!(web_map.operational_layers.len(), 1);
    let OperationalLayer::Basemap(basemap) = &web_map.operational_layers[0] else {
        panic!("first layer must be the basemap");
    };
    assert_eq!(
        basemap.style_url.as_deref(),
        Some("http://server.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer")
    );
    assert!(web_map.graphics().is_none());
}

#[test]
fn test_satellite_with_markers_and_size() {
    let web_map = WebMapBuilder::new(center_xy("40.0,-75.0"))
        .zoom(ZoomLevel::from_param(Some("15")))
        .basemap_params(Some("satellite"), None)
        .markers(&["40.0,-75.0|color:purple|width:20", "39.9,-75.1"])
        .size(Some("640x480"))
        .build();

    let json = serde_json::to_value(&web_map).unwrap();

    assert_eq!(json["mapOptions"]["showAttribution"], false);
    assert_eq!(json["mapOptions"]["extent"]["spatialReference"]["wkid"], 102100);
    let width = json["mapOptions"]["extent"]["xmax"].as_f64().unwrap()
        - json["mapOptions"]["extent"]["xmin"].as_f64().unwrap();
    assert!((width - 20_000_000.0).abs() < 1e-6);

    let layers = json["operationalLayers"].as_array().unwrap();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0]["layerType"], "ArcGISTiledMapServiceLayer");
    assert_eq!(layers[1]["id"], "map_graphics");

    let features = layers[1]["featureCollection"]["layers"][0]["featureSet"]["features"]
        .as_array()
        .unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["symbol"]["width"], 20.0);
    assert_eq!(features[1]["symbol"]["url"], "default.png");
    assert_eq!(features[1]["symbol"]["height"], DEFAULT_HEIGHT);

    assert_eq!(json["exportOptions"]["outputSize"], serde_json::json!([640, 480]));
}

#[test]
fn test_marker_position_is_projected_lng_lat() {
    let marker = Marker::parse("47.6,-122.3").unwrap();
    let feature = marker.to_feature().unwrap();
    let (x, y) = lng_lat_to_xy(-122.3, 47.6);
    assert_eq!(feature.geometry.x, x);
    assert_eq!(feature.geometry.y, y);
}

#[test]
fn test_invalid_zoom_defaults() {
    for zoom in [Some("0"), Some("16"), Some("abc"), None] {
        let web_map = WebMapBuilder::new((0.0, 0.0))
            .zoom(ZoomLevel::from_param(zoom))
            .build();
        assert_eq!(web_map.map_options.extent.xmax, 500.0, "zoom {zoom:?}");
    }
}

#[test]
fn test_unknown_basemap_falls_back() {
    let web_map = WebMapBuilder::new((0.0, 0.0))
        .basemap_params(None, Some("bogus-style"))
        .build();
    assert_eq!(
        web_map.basemap().unwrap().style_url,
        Some(BasemapStyle::Default.url())
    );
}

// ============================================================================
// Export request
// ============================================================================

#[test]
fn test_export_request_carries_document() {
    let web_map = WebMapBuilder::new((0.0, 0.0)).size(Some("300x200")).build();
    let request = ExportRequest::from_web_map(&web_map, None).unwrap();

    let decoded: serde_json::Value = serde_json::from_str(&request.web_map_json).unwrap();
    assert_eq!(decoded["exportOptions"]["outputSize"], serde_json::json!([300, 200]));
    assert_eq!(
        web_map.export_options.output_size,
        OutputSize { width: 300, height: 200 }
    );
}
