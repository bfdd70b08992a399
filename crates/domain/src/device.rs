//! Device identity and the fixed installation layout.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier reported by a sensor node.
///
/// The API stores ids as integers but the dashboard treats them as opaque
/// text, so both JSON strings and JSON integers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compass position of this device in the installation.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::of(self)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for DeviceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// Where a sensor node is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    North,
    EastNorth,
    EastSouth,
    East,
    South,
    WestSouth,
    West,
    SouthWest,
    WestNorth,
    NorthWest,
    Unknown,
}

impl Position {
    /// Look up the position for a device. Ids outside `1..=10` are
    /// [`Position::Unknown`]; matching is on the exact text, so `"03"` is
    /// unknown too.
    #[must_use]
    pub fn of(device: &DeviceId) -> Self {
        match device.as_str() {
            "1" => Self::North,
            "2" => Self::EastNorth,
            "3" => Self::EastSouth,
            "4" => Self::East,
            "5" => Self::South,
            "6" => Self::WestSouth,
            "7" => Self::West,
            "8" => Self::SouthWest,
            "9" => Self::WestNorth,
            "10" => Self::NorthWest,
            _ => Self::Unknown,
        }
    }

    /// Label shown in the table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::EastNorth => "East North",
            Self::EastSouth => "East South",
            Self::East => "East",
            Self::South => "South",
            Self::WestSouth => "West South",
            Self::West => "West",
            Self::SouthWest => "South West",
            Self::WestNorth => "West North",
            Self::NorthWest => "North West",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_installed_device_to_its_label() {
        let expected = [
            "North",
            "East North",
            "East South",
            "East",
            "South",
            "West South",
            "West",
            "South West",
            "West North",
            "North West",
        ];
        for (n, label) in (1..=10).zip(expected) {
            let id = DeviceId::new(n.to_string());
            assert_eq!(id.position().label(), label, "device {n}");
        }
    }

    #[test]
    fn should_return_unknown_when_id_is_outside_layout() {
        for raw in ["0", "11", "03", "", "north", " 3"] {
            assert_eq!(Position::of(&DeviceId::from(raw)), Position::Unknown);
        }
        assert_eq!(Position::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn should_deserialize_id_from_string_or_integer() {
        let text: DeviceId = serde_json::from_str("\"3\"").unwrap();
        let number: DeviceId = serde_json::from_str("3").unwrap();
        assert_eq!(text, number);
        assert_eq!(number.position(), Position::EastSouth);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&DeviceId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn should_reject_non_scalar_id() {
        assert!(serde_json::from_str::<DeviceId>("[1]").is_err());
    }
}
