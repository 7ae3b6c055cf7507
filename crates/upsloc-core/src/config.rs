use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let access_key = require("UPS_ACCESS_KEY")?;
    let user_id = require("UPS_USER_ID")?;
    let password = require("UPS_PASSWORD")?;

    let env = parse_environment(&or_default("UPS_ENV", "production"))?;
    let base_url = lookup("UPS_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| env.base_url().to_string());
    let customer_context = lookup("UPS_CUSTOMER_CONTEXT")
        .ok()
        .filter(|ctx| !ctx.is_empty());

    let request_timeout_secs = parse_u64("UPS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("UPS_USER_AGENT", "upsloc/0.1 (locator)");
    let log_level = or_default("UPS_LOG_LEVEL", "info");

    Ok(AppConfig {
        env,
        base_url,
        access_key,
        user_id,
        password,
        customer_context,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "production" => Ok(Environment::Production),
        "integration" => Ok(Environment::Integration),
        other => Err(ConfigError::InvalidEnvVar {
            var: "UPS_ENV".to_string(),
            reason: format!("expected 'production' or 'integration', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
