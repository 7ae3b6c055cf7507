//! Request option flags and per-search settings.

use std::str::FromStr;

use crate::ConfigError;

/// Category selector sent as `Request/RequestOption`.
///
/// The vendor treats the value as a bitmask, but only the nine combinations
/// below are documented. Anything else is rejected at construction instead
/// of being forwarded to the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestOption(u8);

impl RequestOption {
    pub const LOCATIONS: Self = Self(1);
    pub const ADDITIONAL_SERVICES: Self = Self(8);
    pub const PROGRAM_TYPE: Self = Self(16);
    pub const ADDITIONAL_SERVICES_AND_PROGRAM_TYPE: Self = Self(24);
    pub const RETAIL_LOCATIONS: Self = Self(32);
    pub const RETAIL_LOCATIONS_AND_ADDITIONAL_SERVICES: Self = Self(40);
    pub const RETAIL_LOCATIONS_AND_PROGRAM_TYPE: Self = Self(48);
    pub const RETAIL_LOCATIONS_AND_ADDITIONAL_SERVICES_AND_PROGRAM_TYPE: Self = Self(56);
    pub const UPS_ACCESS_POINT: Self = Self(64);

    const KNOWN: [Self; 9] = [
        Self::LOCATIONS,
        Self::ADDITIONAL_SERVICES,
        Self::PROGRAM_TYPE,
        Self::ADDITIONAL_SERVICES_AND_PROGRAM_TYPE,
        Self::RETAIL_LOCATIONS,
        Self::RETAIL_LOCATIONS_AND_ADDITIONAL_SERVICES,
        Self::RETAIL_LOCATIONS_AND_PROGRAM_TYPE,
        Self::RETAIL_LOCATIONS_AND_ADDITIONAL_SERVICES_AND_PROGRAM_TYPE,
        Self::UPS_ACCESS_POINT,
    ];

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every flag set in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for RequestOption {
    fn default() -> Self {
        Self::LOCATIONS
    }
}

impl std::fmt::Display for RequestOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for RequestOption {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::KNOWN
            .into_iter()
            .find(|option| u32::from(option.0) == value)
            .ok_or_else(|| ConfigError::UnknownRequestOption(value.to_string()))
    }
}

impl FromStr for RequestOption {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::UnknownRequestOption(s.to_string()))?;
        Self::try_from(value)
    }
}

pub const DEFAULT_MAX_LIST_SIZE: u32 = 15;
pub const DEFAULT_LANGUAGE_CODE: &str = "eng";
pub const DEFAULT_LOCALE: &str = "en-US";

/// Settings for a single Locator search besides the address and radius.
///
/// Build with struct-update syntax over [`SearchOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub request_option: RequestOption,
    /// Written twice into the request: under `LocationSearchCriteria` and
    /// again under `AddressKeyFormat`.
    pub max_list_size: u32,
    pub language_code: String,
    /// Goes into `Translate/Local` only. The document's `xml:lang`
    /// attribute stays `en-US` regardless.
    pub locale: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            request_option: RequestOption::default(),
            max_list_size: DEFAULT_MAX_LIST_SIZE,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}
