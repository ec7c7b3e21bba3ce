//! Measurement units.

use super::ItemError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Specifying how an item's quantity is measured.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(fake::Dummy))]
pub enum Unit {
    /// Discrete count, stored as "unit".
    Count,
    /// Mass in kilograms, stored as "kg".
    Kilogram,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Count
    }
}

impl Unit {
    /// Return the canonical storage tag.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Count => "unit",
            Unit::Kilogram => "kg",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mass spellings collapse to `Kilogram`; "kilo" is what older edit forms wrote.
///
impl FromStr for Unit {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" | "units" => Ok(Unit::Count),
            "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => Ok(Unit::Kilogram),
            _ => Err(ItemError::UnknownUnit(s.to_string())),
        }
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tags() {
        assert_eq!("unit".parse::<Unit>(), Ok(Unit::Count));
        assert_eq!("kg".parse::<Unit>(), Ok(Unit::Kilogram));
    }

    #[test]
    fn test_parse_mass_aliases() {
        for tag in ["kilo", "KILO", " Kg ", "kilograms", "kilos"] {
            assert_eq!(tag.parse::<Unit>(), Ok(Unit::Kilogram), "tag {:?}", tag);
        }
    }

    #[test]
    fn test_parse_unknown_unit() {
        let result = "litre".parse::<Unit>();
        assert_eq!(result, Err(ItemError::UnknownUnit("litre".to_string())));
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn test_serialize_is_canonical() {
        assert_eq!(serde_json::to_string(&Unit::Kilogram).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&Unit::Count).unwrap(), "\"unit\"");
    }

    #[test]
    fn test_deserialize_legacy_kilo() {
        let unit: Unit = serde_json::from_str("\"kilo\"").unwrap();
        assert_eq!(unit, Unit::Kilogram);
        assert!(serde_json::from_str::<Unit>("\"box\"").is_err());
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Unit::default(), Unit::Count);
        assert_eq!(Unit::Kilogram.to_string(), "kg");
    }
}
