use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Postal address used as the search origin.
///
/// Every field is optional. Missing fields are still written to the request
/// as empty elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub attention_name: Option<String>,
    pub building_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    /// City or locality, sent as `PoliticalDivision1`.
    pub city: Option<String>,
    /// State or province code, sent as `PoliticalDivision2`.
    pub state_province_code: Option<String>,
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
}

/// Load an origin address from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_address(path: &Path) -> Result<Address, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AddressFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(serde_yaml::from_str(&content)?)
}
