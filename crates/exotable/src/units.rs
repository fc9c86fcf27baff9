//! Physical units attached to columns.
//!
//! Units are opaque labels here. Two columns carry the same unit only if the
//! labels are equal; no conversion between units is attempted.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rendering of [`Unit::NoUnit`].
pub const NO_UNIT: &str = "N/A";

/// Rendering of [`Unit::Unitless`].
pub const UNITLESS: &str = "w/o unit";

/// Unit of the values in a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Values are not numbers (names, flags, spectral types).
    NoUnit,
    /// Values are dimensionless numbers (eccentricity, magnitudes).
    Unitless,
    /// Nothing is known about the unit.
    #[default]
    Unspecified,
    /// A physical unit, e.g. `d`, `deg`, `jupiterMass`.
    Named(String),
}

impl Unit {
    /// Create a named physical unit.
    pub fn named(label: impl Into<String>) -> Self {
        Unit::Named(label.into())
    }

    /// Parse a unit label, recognising the sentinels.
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "" => Unit::Unspecified,
            NO_UNIT => Unit::NoUnit,
            UNITLESS => Unit::Unitless,
            other => Unit::Named(other.to_string()),
        }
    }

    /// Label used when rendering the unit.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::NoUnit => NO_UNIT,
            Unit::Unitless => UNITLESS,
            Unit::Unspecified => "",
            Unit::Named(label) => label,
        }
    }

    /// Returns true if values in a column with this unit are numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Unit::Unitless | Unit::Named(_))
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Unit::Unspecified)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Unit {
    fn from(label: &str) -> Self {
        Unit::parse(label)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Unit::parse(&label))
    }
}

/// Unit labels shared by the registry and the source definitions.
pub mod labels {
    pub const DAY: &str = "d";
    pub const DEGREE: &str = "deg";
    pub const AU: &str = "AU";
    pub const PERCENT: &str = "%";
    pub const JUPITER_MASS: &str = "jupiterMass";
    pub const JUPITER_RADIUS: &str = "jupiterRad";
    pub const JUPITER_DENSITY: &str = "jupiterMass / jupiterRad3";
    pub const SOLAR_MASS: &str = "solMass";
    pub const SOLAR_RADIUS: &str = "solRad";
    pub const SOLAR_DENSITY: &str = "solMass / solRad3";
    pub const KELVIN: &str = "K";
    pub const DEX: &str = "dex";
    pub const SURFACE_GRAVITY: &str = "m s2";
    pub const KM_PER_S: &str = "km / s";
    pub const MAS: &str = "mas";
    pub const MAS_PER_YEAR: &str = "mas / yr";
}
