use crate::domain::GeoCoordinate;
use serde::Serialize;

/// A geocoding match for a free-text query.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Place {
    pub name: String,
    pub display_name: String,
    pub coordinate: GeoCoordinate,
}

impl Place {
    /// Creates a place, deriving its short name from the first segment of the full address.
    pub fn new(display_name: impl Into<String>, coordinate: GeoCoordinate) -> Self {
        let display_name = display_name.into();
        let name = display_name.split(',').next().unwrap_or_default().trim().to_string();

        Place {
            name,
            display_name,
            coordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Paris, Île-de-France, France métropolitaine, France", "Paris")]
    #[case("Greenwich", "Greenwich")]
    #[case(" Big Ben , Westminster", "Big Ben")]
    #[case("", "")]
    fn short_name_is_the_first_address_segment(#[case] display_name: &str, #[case] expected: &str) {
        let place = Place::new(display_name, GeoCoordinate::default());

        assert_eq!(place.name, expected);
        assert_eq!(place.display_name, display_name);
    }
}
