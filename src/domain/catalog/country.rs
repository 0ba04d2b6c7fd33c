//! Country reference types: codes, rarity tiers, regions, coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Non-blank origin code as logged on an entry.
///
/// Catalog codes are ISO alpha-2, but construction only trims and
/// upper-cases. It does not check length or the catalog; entries written before a catalog change may carry codes that no
/// longer resolve, and aggregation skips those instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a code from user or storage input, upper-casing it.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(ValidationError::empty_field("origin_country"));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collection-game rarity tier of an origin, based on market availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// All tiers, most common first.
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];

    /// Wire value, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Rarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "legendary" => Ok(Rarity::Legendary),
            other => Err(ValidationError::invalid_format(
                "rarity",
                format!("expected common, rare or legendary, got '{}'", other),
            )),
        }
    }
}

/// Growing region an origin belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Africa,
    Asia,
    Caribbean,
    CentralAmerica,
    MiddleEast,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Region {
    /// Returns the display name for this region.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Caribbean => "Caribbean",
            Region::CentralAmerica => "Central America",
            Region::MiddleEast => "Middle East",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
        }
    }
}

/// Map pin position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Static description of one coffee-producing origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryReference {
    pub code: &'static str,
    pub name: &'static str,
    pub region: Region,
    pub flavor_profile: &'static str,
    pub rarity: Rarity,
    pub coordinates: Coordinates,
}

impl CountryReference {
    /// Returns the code as an owned `CountryCode`.
    pub fn country_code(&self) -> CountryCode {
        CountryCode(self.code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_normalizes_case_and_whitespace() {
        let code = CountryCode::new(" et ").unwrap();
        assert_eq!(code.as_str(), "ET");
    }

    #[test]
    fn country_code_rejects_blank() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("  ").is_err());
    }

    #[test]
    fn country_code_keeps_non_catalog_shapes() {
        assert_eq!(CountryCode::new("xyz").unwrap().as_str(), "XYZ");
        assert_eq!(CountryCode::new("k").unwrap().as_str(), "K");
    }

    #[test]
    fn rarity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Rarity::Legendary).unwrap(), "\"legendary\"");
    }

    #[test]
    fn rarity_parses_case_insensitively() {
        assert_eq!("Rare".parse::<Rarity>().unwrap(), Rarity::Rare);
        assert!("mythic".parse::<Rarity>().is_err());
    }

    #[test]
    fn region_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Region::CentralAmerica).unwrap(),
            "\"central-america\""
        );
    }

    #[test]
    fn reference_serializes_with_wire_names() {
        let reference = CountryReference {
            code: "ET",
            name: "Ethiopia",
            region: Region::Africa,
            flavor_profile: "Blueberry, jasmine, citrus, wine-like",
            rarity: Rarity::Rare,
            coordinates: Coordinates { lat: 9.145, lon: 40.489 },
        };
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["flavor_profile"], "Blueberry, jasmine, citrus, wine-like");
        assert_eq!(json["region"], "africa");
        assert_eq!(json["coordinates"]["lat"], 9.145);
    }
}
