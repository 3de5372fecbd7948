use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

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

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let bot_token = require("RECAP_BOT_TOKEN")?;
    let webhook_url = require("RECAP_WEBHOOK_URL")?;

    let channel_id = or_default("RECAP_CHANNEL_ID", "940127956276224020");
    let report_dir = PathBuf::from(or_default("RECAP_REPORT_DIR", "week"));
    let log_level = or_default("RECAP_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("RECAP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("RECAP_USER_AGENT", "recap/0.1 (weekly-contributor-recap)");
    let profile_link_base = or_default("RECAP_PROFILE_LINK_BASE", "https://tds.fandom.com/User:");
    let recap_link_base = or_default(
        "RECAP_RECAP_LINK_BASE",
        "https://github.com/Paradoxum-Wikis/weekly-contributor-test/blob/main/week/",
    );

    Ok(AppConfig {
        bot_token,
        webhook_url,
        channel_id,
        report_dir,
        log_level,
        request_timeout_secs,
        user_agent,
        profile_link_base,
        recap_link_base,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
