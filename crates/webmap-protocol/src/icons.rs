//! Pre-baked marker sprites.

/// A marker sprite as embedded in a picture-marker symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub content_type: &'static str,
    /// Base64-encoded image bytes.
    pub image_data: &'static str,
}

static PURPLE: Icon = Icon {
    content_type: "image/png",
    image_data: include_str!("../assets/icons/purple.png.b64"),
};

static ORANGE: Icon = Icon {
    content_type: "image/png",
    image_data: include_str!("../assets/icons/orange.png.b64"),
};

/// Look up the sprite for a marker color.
///
/// Only `purple` and `orange` have their own sprite; every other color,
/// including none at all, gets the default pin which shares the orange art.
pub fn icon_for_color(color: Option<&str>) -> &'static Icon {
    match color {
        Some("purple") => &PURPLE,
        Some("orange") => &ORANGE,
        _ => default_icon(),
    }
}

pub fn default_icon() -> &'static Icon {
    &ORANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE_B64: &str = "iVBORw0KGgo";

    #[test]
    fn test_icons_are_png() {
        for icon in [&PURPLE, &ORANGE] {
            assert_eq!(icon.content_type, "image/png");
            assert!(icon.image_data.starts_with(PNG_SIGNATURE_B64));
            assert!(!icon.image_data.ends_with('\n'));
        }
    }

    #[test]
    fn test_color_lookup() {
        assert_eq!(icon_for_color(Some("purple")), &PURPLE);
        assert_eq!(icon_for_color(Some("orange")), &ORANGE);
        assert_ne!(icon_for_color(Some("purple")), icon_for_color(Some("orange")));
    }

    #[test]
    fn test_unknown_color_falls_back() {
        assert_eq!(icon_for_color(Some("chartreuse")), default_icon());
        assert_eq!(icon_for_color(None), default_icon());
    }
}
