use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Statute miles per kilometer.
pub const MILES_PER_KM: f64 = 0.621371;

/// A surface distance, stored in kilometers.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Debug)]
pub struct Distance {
    kilometers: f64,
}

impl Distance {
    pub fn from_km(kilometers: f64) -> Self {
        Distance { kilometers }
    }

    pub fn km(&self) -> f64 {
        self.kilometers
    }

    pub fn miles(&self) -> f64 {
        self.kilometers * MILES_PER_KM
    }

    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Kilometers => self.km(),
            DistanceUnit::Miles => self.miles(),
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} km", self.kilometers)
    }
}

impl Serialize for Distance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Distance", 2)?;
        state.serialize_field("kilometers", &self.km())?;
        state.serialize_field("miles", &self.miles())?;
        state.end()
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    #[serde(alias = "km")]
    Kilometers,
    #[serde(alias = "mi")]
    Miles,
}

impl DistanceUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// The unit shown next to this one in reports.
    pub fn other(&self) -> DistanceUnit {
        match self {
            DistanceUnit::Kilometers => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Kilometers,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "mi" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(format!("unknown distance unit '{}', expected 'km' or 'mi'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(343.556)]
    #[case(10007.543398010286)]
    fn miles_are_a_fixed_multiply_of_kilometers(#[case] km: f64) {
        let distance = Distance::from_km(km);

        assert_eq!(distance.miles(), km * 0.621371);
        assert_eq!(distance.in_unit(DistanceUnit::Miles), km * 0.621371);
        assert_eq!(distance.in_unit(DistanceUnit::Kilometers), km);
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Distance::from_km(343.5561).to_string(), "343.56 km");
    }

    #[test]
    fn serializes_both_units() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(Distance::from_km(100.0))?;

        assert_eq!(json, serde_json::json!({ "kilometers": 100.0, "miles": 100.0 * 0.621371 }));
        Ok(())
    }

    #[rstest]
    #[case("km", DistanceUnit::Kilometers)]
    #[case("Kilometers", DistanceUnit::Kilometers)]
    #[case("kilometres", DistanceUnit::Kilometers)]
    #[case("mi", DistanceUnit::Miles)]
    #[case(" MILES ", DistanceUnit::Miles)]
    fn parses_units(#[case] input: &str, #[case] expected: DistanceUnit) {
        assert_eq!(input.parse::<DistanceUnit>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_units() {
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn deserializes_units_with_aliases() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::from_str::<DistanceUnit>(r#""mi""#)?, DistanceUnit::Miles);
        assert_eq!(serde_json::from_str::<DistanceUnit>(r#""kilometers""#)?, DistanceUnit::Kilometers);
        Ok(())
    }
}
