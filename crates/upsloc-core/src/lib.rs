//! Domain values and configuration for the UPS Locator client.
//!
//! Everything here is a plain value: addresses, search radius, request
//! options, and the environment-driven [`AppConfig`]. Nothing in this crate
//! performs network I/O.

pub mod address;
mod app_config;
pub mod config;
pub mod options;
pub mod radius;

use thiserror::Error;

pub use address::{load_address, Address};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use options::{RequestOption, SearchOptions};
pub use radius::{DistanceUnit, SearchRadius};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown range unit: \"{0}\"")]
    UnknownUnit(String),

    #[error("unknown request option: {0}")]
    UnknownRequestOption(String),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read address file {path}: {source}")]
    AddressFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse address file: {0}")]
    AddressFileParse(#[from] serde_yaml::Error),
}
