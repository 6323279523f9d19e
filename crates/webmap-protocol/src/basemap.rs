//! Basemap style keywords.
//!
//! Every keyword resolves to either a map service URL or a vector tile style
//! document. Unknown keywords fall back to the World Topo map service.

/// Base URL for vector basemap style items hosted on arcgis.com.
const STYLE_ITEM_BASE: &str = "https://www.arcgis.com/sharing/rest/content/items";

/// Fallback for unknown keywords.
pub const DEFAULT_BASEMAP_URL: &str =
    "http://server.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer";

/// Known basemap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasemapStyle {
    Satellite,
    Topo,
    LightGray,
    DarkGray,
    Streets,
    Hybrid,
    Oceans,
    NationalGeographic,
    Navigation,
    Osm,
    ModernAntique,
    Nova,
    Community,
    MidCentury,
    ParchmentTexture,
    FoldedPaperTexture,
    /// Anything not listed above.
    Default,
}

impl BasemapStyle {
    /// Rewrite legacy `maptype` names to basemap keywords.
    pub fn normalize_alias(keyword: &str) -> &str {
        match keyword {
            "roadmap" => "navigation",
            "terrain" => "topo",
            other => other,
        }
    }

    /// Exact keyword lookup. Aliases are not applied here.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "satellite" => BasemapStyle::Satellite,
            "topo" => BasemapStyle::Topo,
            "light-gray" => BasemapStyle::LightGray,
            "dark-gray" => BasemapStyle::DarkGray,
            "streets" => BasemapStyle::Streets,
            "hybrid" => BasemapStyle::Hybrid,
            "oceans" => BasemapStyle::Oceans,
            "national-geographic" => BasemapStyle::NationalGeographic,
            "navigation" => BasemapStyle::Navigation,
            "osm" => BasemapStyle::Osm,
            "modern-antique" => BasemapStyle::ModernAntique,
            "nova" => BasemapStyle::Nova,
            "community" => BasemapStyle::Community,
            "mid-century" => BasemapStyle::MidCentury,
            "parchment-texture" => BasemapStyle::ParchmentTexture,
            "folded-paper-texture" => BasemapStyle::FoldedPaperTexture,
            _ => BasemapStyle::Default,
        }
    }

    /// Pick the style from the `maptype` / `basemap` request parameters.
    ///
    /// A present `maptype` wins over `basemap` and is alias-normalized first.
    pub fn from_params(maptype: Option<&str>, basemap: Option<&str>) -> Self {
        match (maptype, basemap) {
            (Some(maptype), _) => Self::from_keyword(Self::normalize_alias(maptype)),
            (None, Some(basemap)) => Self::from_keyword(basemap),
            (None, None) => BasemapStyle::Default,
        }
    }

    /// Only the imagery basemap is sent as a tiled map service layer.
    pub fn is_tiled(&self) -> bool {
        matches!(self, BasemapStyle::Satellite)
    }

    /// Service or style document URL for this basemap.
    pub fn url(&self) -> String {
        match self {
            BasemapStyle::Satellite => {
                "https://services.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer".into()
            }
            BasemapStyle::Topo => style_item("7dc6cea0b1764a1f9af2e679f642f0f5"),
            BasemapStyle::LightGray => style_item("291da5eab3a0412593b66d384379f89f"),
            BasemapStyle::DarkGray => style_item("c11ce4f7801740b2905eb03ddc963ac8"),
            BasemapStyle::Streets => {
                "http://server.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer".into()
            }
            BasemapStyle::Hybrid => {
                "http://services.arcgisonline.com/ArcGIS/rest/services/Reference/World_Boundaries_and_Places/MapServer".into()
            }
            BasemapStyle::Oceans => {
                "http://server.arcgisonline.com/arcgis/rest/services/Ocean/World_Ocean_Reference/MapServer".into()
            }
            BasemapStyle::NationalGeographic => style_item("3d1a30626bbc46c582f148b9252676ce"),
            BasemapStyle::Navigation => style_item("63c47b7177f946b49902c24129b87252"),
            BasemapStyle::Osm => {
                "https://tiles.arcgis.com/tiles/nSZVuSZjHpEZZbRo/arcgis/rest/services/OSM_RD/VectorTileServer/resources/styles/root.json?f=pjson".into()
            }
            BasemapStyle::ModernAntique => style_item("effe3475f05a4d608e66fd6eeb2113c0"),
            BasemapStyle::Nova => style_item("75f4dfdff19e445395653121a95a85db"),
            BasemapStyle::Community => style_item("273bf8d5c8ac400183fc24e109d20bcf"),
            BasemapStyle::MidCentury => style_item("7675d44bb1e4428aa2c30a9b68f97822"),
            BasemapStyle::ParchmentTexture => {
                "https://tiles.arcgis.com/tiles/nGt4QxSblgDfeJn9/arcgis/rest/services/ParchmentTexture/VectorTileServer/resources/styles/root.json?f=pjson".into()
            }
            BasemapStyle::FoldedPaperTexture => {
                "https://tiles.arcgis.com/tiles/nGt4QxSblgDfeJn9/arcgis/rest/services/FoldedPaperTexture/VectorTileServer/resources/styles/root.json?f=pjson".into()
            }
            BasemapStyle::Default => DEFAULT_BASEMAP_URL.into(),
        }
    }
}

fn style_item(item_id: &str) -> String {
    format!(
        "{}/{}/resources/styles/root.json?f=pjson",
        STYLE_ITEM_BASE, item_id
    )
}

/// Resolve a basemap keyword straight to its URL.
pub fn resolve_basemap_url(keyword: &str) -> String {
    BasemapStyle::from_keyword(keyword).url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satellite_is_imagery() {
        assert_eq!(
            resolve_basemap_url("satellite"),
            "https://services.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer"
        );
        assert!(BasemapStyle::Satellite.is_tiled());
        assert!(!BasemapStyle::Streets.is_tiled());
    }

    #[test]
    fn test_roadmap_alias_resolves_to_navigation() {
        let style = BasemapStyle::from_params(Some("roadmap"), None);
        assert_eq!(style, BasemapStyle::Navigation);
        assert_eq!(
            style.url(),
            "https://www.arcgis.com/sharing/rest/content/items/63c47b7177f946b49902c24129b87252/resources/styles/root.json?f=pjson"
        );
    }

    #[test]
    fn test_terrain_alias() {
        assert_eq!(BasemapStyle::normalize_alias("terrain"), "topo");
        assert_eq!(BasemapStyle::from_params(Some("terrain"), None), BasemapStyle::Topo);
    }

    #[test]
    fn test_aliases_only_apply_to_maptype() {
        assert_eq!(BasemapStyle::from_params(None, Some("roadmap")), BasemapStyle::Default);
    }

    #[test]
    fn test_maptype_overrides_basemap() {
        assert_eq!(
            BasemapStyle::from_params(Some("terrain"), Some("streets")),
            BasemapStyle::Topo
        );
    }

    #[test]
    fn test_unknown_keyword_uses_default() {
        assert_eq!(resolve_basemap_url("bogus-style"), DEFAULT_BASEMAP_URL);
        assert_eq!(BasemapStyle::from_params(None, None).url(), DEFAULT_BASEMAP_URL);
        // Lookup is exact.
        assert_eq!(BasemapStyle::from_keyword("Satellite"), BasemapStyle::Default);
    }

    #[test]
    fn test_all_keywords_distinct_urls() {
        let keywords = [
            "satellite",
            "topo",
            "light-gray",
            "dark-gray",
            "streets",
            "hybrid",
            "oceans",
            "national-geographic",
            "navigation",
            "osm",
            "modern-antique",
            "nova",
            "community",
            "mid-century",
            "parchment-texture",
            "folded-paper-texture",
        ];
        let mut urls: Vec<String> = keywords.iter().map(|k| resolve_basemap_url(k)).collect();
        assert!(!urls.iter().any(|u| u == DEFAULT_BASEMAP_URL));
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), keywords.len());
    }
}
