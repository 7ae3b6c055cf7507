//! Search radius: a distance magnitude paired with its unit of measure.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Distance unit accepted by the Locator endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "KM", alias = "KILOMETERS")]
    Kilometers,
    #[serde(rename = "MI", alias = "MILES")]
    Miles,
}

impl DistanceUnit {
    /// Wire code written into `UnitOfMeasurement/Code`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "KM",
            DistanceUnit::Miles => "MI",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DistanceUnit {
    type Err = ConfigError;

    /// Accepts the wire codes (`KM`, `MI`) or their long names
    /// (`KILOMETERS`, `MILES`). Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KM" | "KILOMETERS" => Ok(DistanceUnit::Kilometers),
            "MI" | "MILES" => Ok(DistanceUnit::Miles),
            other => Err(ConfigError::UnknownUnit(other.to_string())),
        }
    }
}

/// Radius around the origin address within which locations are searched.
///
/// Immutable once built. The magnitude has no upper bound here; the vendor
/// decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRadius {
    radius: u32,
    unit: DistanceUnit,
}

impl SearchRadius {
    #[must_use]
    pub const fn new(radius: u32, unit: DistanceUnit) -> Self {
        Self { radius, unit }
    }

    /// Builds a radius from a raw unit symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownUnit`] when `unit` is not one of the
    /// recognised symbols.
    pub fn parse(radius: u32, unit: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(radius, unit.parse()?))
    }

    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    #[must_use]
    pub const fn unit(&self) -> DistanceUnit {
        self.unit
    }
}
