//! Parsing of the `center` request parameter.

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

/// Where the map should be centered.
#[derive(Debug, Clone, PartialEq)]
pub enum Center {
    /// A numeric pair, already in the order the projector consumes.
    Point(LngLat),
    /// Free text that has to go through the geocoder.
    Address(String),
}

impl Center {
    /// Parse a `center` value.
    ///
    /// `"a,b"` with both tokens finite numbers becomes `[b, a]`, i.e. the
    /// second token is read as longitude and the first as latitude. Anything
    /// else, `NaN` and `inf` included, is returned unchanged as an address.
    pub fn parse(value: &str) -> Self {
        let tokens: Vec<&str> = value.split(',').collect();

        if let [first, second] = tokens.as_slice() {
            if let (Some(first), Some(second)) = (finite(first), finite(second)) {
                return Center::Point(LngLat {
                    lng: second,
                    lat: first,
                });
            }
        }

        Center::Address(value.to_string())
    }

    /// The coordinate pair in projector order `[lng, lat]`, if numeric.
    pub fn as_pair(&self) -> Option<[f64; 2]> {
        match self {
            Center::Point(p) => Some([p.lng, p.lat]),
            Center::Address(_) => None,
        }
    }
}

fn finite(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_pair_is_swapped() {
        let center = Center::parse("40.0,-75.0");
        assert_eq!(center.as_pair(), Some([-75.0, 40.0]));
    }

    #[test]
    fn test_address_passthrough() {
        assert_eq!(
            Center::parse("downtown seattle"),
            Center::Address("downtown seattle".to_string())
        );
    }

    #[test]
    fn test_comma_address_passthrough() {
        // Two tokens, but not both numeric.
        assert_eq!(
            Center::parse("Portland, OR"),
            Center::Address("Portland, OR".to_string())
        );
        // Three numeric tokens are not a pair.
        assert!(matches!(Center::parse("1,2,3"), Center::Address(_)));
    }

    #[test]
    fn test_non_finite_pair_is_address() {
        for value in ["NaN,NaN", "inf,0", "0,-infinity", "nan,1"] {
            assert_eq!(
                Center::parse(value),
                Center::Address(value.to_string()),
                "{value} should go to the geocoder"
            );
        }
    }

    #[test]
    fn test_whitespace_around_numbers() {
        assert_eq!(Center::parse(" 47.6 , -122.3 ").as_pair(), Some([-122.3, 47.6]));
    }
}
