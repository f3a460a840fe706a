use crate::app_config::{AppConfig, DEFAULT_SERP_BASE_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
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

    // A blank credential counts as unset.
    let serp_auth = lookup("SHELFKIT_SERP_AUTH")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let serp_base_url = or_default("SHELFKIT_SERP_BASE_URL", DEFAULT_SERP_BASE_URL);
    let log_level = or_default("SHELFKIT_LOG_LEVEL", "info");
    let user_agent = or_default("SHELFKIT_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs = parse_u64("SHELFKIT_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHELFKIT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        serp_auth,
        serp_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
